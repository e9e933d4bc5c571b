//! Offline phase-space inspection.
//!
//! Decodes an entire stream into parallel column arrays for analysis
//! tooling (energy spectra, fluence maps). Columns are `f32`: analysis
//! precision, not transport precision.

use std::io::Read;

use crate::error::PhasespaceError;
use crate::reader::PhasespaceReader;

/// An entire phase-space stream decoded into parallel column arrays.
///
/// Row `i` of every column describes the `i`-th record in stream
/// order. The scan stops cleanly at end-of-stream; I/O failures and
/// truncated records propagate to the caller.
///
/// # Examples
///
/// ```
/// use kerma_core::{ParticleKind, Vec3};
/// use kerma_phasespace::{PhasespaceColumns, PhasespaceRecord, PhasespaceWriter};
///
/// let mut buf = Vec::new();
/// let mut writer = PhasespaceWriter::new(&mut buf);
/// writer
///     .write_record(&PhasespaceRecord {
///         position: Vec3::ZERO,
///         momentum: Vec3::new(0.0, 0.0, -6.0),
///         kinetic_energy: 6.0,
///         weight: 1.0,
///         kind: ParticleKind::Photon,
///     })
///     .unwrap();
///
/// let columns = PhasespaceColumns::read_from(buf.as_slice()).unwrap();
/// assert_eq!(columns.len(), 1);
/// assert_eq!(columns.energy()[0], 6.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PhasespaceColumns {
    energy: Vec<f32>,
    weight: Vec<f32>,
    position_x: Vec<f32>,
    position_y: Vec<f32>,
    position_z: Vec<f32>,
    momentum_x: Vec<f32>,
    momentum_y: Vec<f32>,
    momentum_z: Vec<f32>,
    kind_codes: Vec<i32>,
}

impl PhasespaceColumns {
    /// Sequentially decode every record from `reader`.
    pub fn read_from<R: Read>(reader: R) -> Result<Self, PhasespaceError> {
        let mut reader = PhasespaceReader::new(reader);
        let mut columns = Self::default();

        while let Some(record) = reader.next_record()? {
            columns.energy.push(record.kinetic_energy as f32);
            columns.weight.push(record.weight as f32);
            columns.position_x.push(record.position.x as f32);
            columns.position_y.push(record.position.y as f32);
            columns.position_z.push(record.position.z as f32);
            columns.momentum_x.push(record.momentum.x as f32);
            columns.momentum_y.push(record.momentum.y as f32);
            columns.momentum_z.push(record.momentum.z as f32);
            columns.kind_codes.push(record.kind.code());
        }

        Ok(columns)
    }

    /// Number of records decoded.
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// Whether the stream held no records.
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// Kinetic energies, in stream order.
    pub fn energy(&self) -> &[f32] {
        &self.energy
    }

    /// Statistical weights.
    pub fn weight(&self) -> &[f32] {
        &self.weight
    }

    /// Position x components.
    pub fn position_x(&self) -> &[f32] {
        &self.position_x
    }

    /// Position y components.
    pub fn position_y(&self) -> &[f32] {
        &self.position_y
    }

    /// Position z components.
    pub fn position_z(&self) -> &[f32] {
        &self.position_z
    }

    /// Momentum x components.
    pub fn momentum_x(&self) -> &[f32] {
        &self.momentum_x
    }

    /// Momentum y components.
    pub fn momentum_y(&self) -> &[f32] {
        &self.momentum_y
    }

    /// Momentum z components.
    pub fn momentum_z(&self) -> &[f32] {
        &self.momentum_z
    }

    /// Particle-type wire codes.
    pub fn kind_codes(&self) -> &[i32] {
        &self.kind_codes
    }
}
