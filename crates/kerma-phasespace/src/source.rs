//! Replaying a phase-space stream as a primary particle source.
//!
//! Each recorded particle can seed several simulated histories
//! (recycling), and reused records can be rotated to a fresh uniform
//! azimuth about the beam axis (redistribution) to decorrelate the
//! recycled histories without re-recording. Respects the determinism
//! contract: the azimuth RNG is a seeded ChaCha8, so identical seeds
//! produce identical primary sequences.

use std::io::{Read, Seek};
use std::sync::Arc;

use kerma_core::{ParticleKind, RunControl, Vec3};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::PhasespaceError;
use crate::reader::PhasespaceReader;
use crate::record::PhasespaceRecord;

/// A primary particle handed to the transport engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimaryVertex {
    /// Species to transport.
    pub kind: ParticleKind,
    /// Vertex position.
    pub position: Vec3,
    /// Momentum vector — direction and magnitude together.
    pub momentum: Vec3,
    /// Kinetic energy.
    pub kinetic_energy: f64,
    /// Statistical weight, taken from the record unchanged: each
    /// recycle event is an independent history sharing the same
    /// phase-space sample.
    pub weight: f64,
}

/// The outcome of one generation call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SourceOutcome {
    /// A primary was produced.
    Generated(PrimaryVertex),
    /// The stream is exhausted; the run must be aborted in an orderly
    /// fashion. Carries the number of primaries produced before
    /// exhaustion.
    Exhausted {
        /// Primaries produced from this stream before it ran dry.
        consumed: u64,
    },
}

/// Generates primaries for the transport engine by replaying a
/// recorded phase-space stream.
///
/// Constructed via [`PhasespaceSource::builder`].
///
/// # Examples
///
/// ```
/// use kerma_core::{ParticleKind, Vec3};
/// use kerma_phasespace::{
///     PhasespaceRecord, PhasespaceSource, PhasespaceWriter, SourceOutcome,
/// };
///
/// let mut buf = Vec::new();
/// let mut writer = PhasespaceWriter::new(&mut buf);
/// writer
///     .write_record(&PhasespaceRecord {
///         position: Vec3::new(0.0, 0.0, -300.0),
///         momentum: Vec3::new(0.0, 0.0, -6.0),
///         kinetic_energy: 6.0,
///         weight: 1.0,
///         kind: ParticleKind::Photon,
///     })
///     .unwrap();
///
/// let mut source = PhasespaceSource::builder(buf.as_slice()).build().unwrap();
/// assert!(matches!(source.generate().unwrap(), SourceOutcome::Generated(_)));
/// assert_eq!(
///     source.generate().unwrap(),
///     SourceOutcome::Exhausted { consumed: 1 }
/// );
/// assert!(source.run_control().is_aborted());
/// ```
pub struct PhasespaceSource<R: Read> {
    reader: PhasespaceReader<R>,
    recycling_number: u32,
    redistribute: bool,
    gantry_angle_deg: f64,
    rng: ChaCha8Rng,
    run: Arc<RunControl>,
    current: Option<PhasespaceRecord>,
    repeat: u32,
    consumed: u64,
}

/// Builder for [`PhasespaceSource`].
pub struct PhasespaceSourceBuilder<R: Read> {
    reader: R,
    recycling_number: u32,
    redistribute: bool,
    gantry_angle_deg: f64,
    seed: u64,
    run: Option<Arc<RunControl>>,
}

impl<R: Read> PhasespaceSource<R> {
    /// Create a builder replaying records from `reader`.
    pub fn builder(reader: R) -> PhasespaceSourceBuilder<R> {
        PhasespaceSourceBuilder {
            reader,
            recycling_number: 0,
            redistribute: false,
            gantry_angle_deg: 0.0,
            seed: 0,
            run: None,
        }
    }

    /// The shared run-control handle this source aborts through.
    pub fn run_control(&self) -> &Arc<RunControl> {
        &self.run
    }

    /// Primaries produced from the stream so far this run.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Produce the next primary, or report exhaustion.
    ///
    /// A record read from the stream is emitted `recycling_number + 1`
    /// times before the next one is read. Position and momentum are
    /// rotated together by a fresh uniform azimuth per call when
    /// redistribution is enabled, then by the fixed gantry correction;
    /// the vertex weight is the record's weight unchanged.
    ///
    /// # Errors
    ///
    /// I/O failures and truncated records propagate. End-of-stream is
    /// not an error: it yields [`SourceOutcome::Exhausted`], raises the
    /// run-abort flag, and resets the replay counters.
    pub fn generate(&mut self) -> Result<SourceOutcome, PhasespaceError> {
        if self.repeat == 0 {
            match self.reader.next_record()? {
                Some(record) => self.current = Some(record),
                None => {
                    let consumed = self.consumed;
                    self.repeat = 0;
                    self.consumed = 0;
                    self.run.request_abort();
                    return Ok(SourceOutcome::Exhausted { consumed });
                }
            }
        }

        let record = match self.current {
            Some(record) => record,
            None => return Ok(SourceOutcome::Exhausted { consumed: 0 }),
        };

        self.repeat += 1;
        self.consumed += 1;
        if self.repeat > self.recycling_number {
            self.repeat = 0;
        }

        let mut position = record.position;
        let mut momentum = record.momentum;

        if self.redistribute {
            // The same angle rotates both vectors, preserving the
            // particle's direction relative to its position.
            let angle = self.rng.random::<f64>() * std::f64::consts::TAU;
            position = position.rotated_z(angle);
            momentum = momentum.rotated_z(angle);
        }

        // Gantry rotation correction for a rotated treatment head.
        let gantry = -self.gantry_angle_deg.to_radians();
        position = position.rotated_x(gantry);
        momentum = momentum.rotated_x(gantry);

        Ok(SourceOutcome::Generated(PrimaryVertex {
            kind: record.kind,
            position,
            momentum,
            kinetic_energy: record.kinetic_energy,
            weight: record.weight,
        }))
    }
}

/// Selects where a run's primaries come from.
///
/// When no phase-space stream is configured, primary generation falls
/// back to the engine's conventional parametric gun (beam-distributed
/// position, fixed energy, fixed direction) — an external collaborator.
/// Only the switch lives here.
pub enum SourceSelection<R: Read> {
    /// Replay a recorded phase-space stream.
    Phasespace(PhasespaceSource<R>),
    /// Defer to the engine's parametric source.
    Parametric,
}

impl<R: Read> SourceSelection<R> {
    /// Whether a phase-space stream drives this run.
    pub fn is_phasespace(&self) -> bool {
        matches!(self, Self::Phasespace(_))
    }

    /// The phase-space source, when one is configured.
    pub fn as_phasespace_mut(&mut self) -> Option<&mut PhasespaceSource<R>> {
        match self {
            Self::Phasespace(source) => Some(source),
            Self::Parametric => None,
        }
    }
}

impl<R: Read + Seek> PhasespaceSource<R> {
    /// Rewind the stream and reset the replay counters so the next run
    /// replays it from the beginning. The run-abort flag is owned by
    /// the engine and is cleared separately between runs.
    pub fn reset(&mut self) -> Result<(), PhasespaceError> {
        self.reader.rewind()?;
        self.current = None;
        self.repeat = 0;
        self.consumed = 0;
        Ok(())
    }
}

impl<R: Read> PhasespaceSourceBuilder<R> {
    /// Set the recycling number R (default 0). Each record seeds R + 1
    /// histories; 0 means every record is used exactly once.
    pub fn recycling_number(mut self, r: u32) -> Self {
        self.recycling_number = r;
        self
    }

    /// Enable azimuthal redistribution (default off).
    pub fn redistribute(mut self, flag: bool) -> Self {
        self.redistribute = flag;
        self
    }

    /// Set the gantry rotation about the transverse axis, in degrees
    /// (default 0).
    pub fn gantry_angle_deg(mut self, degrees: f64) -> Self {
        self.gantry_angle_deg = degrees;
        self
    }

    /// Set the redistribution RNG seed (default 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Share an existing run-control handle. By default the source
    /// owns a fresh one.
    pub fn run_control(mut self, run: Arc<RunControl>) -> Self {
        self.run = Some(run);
        self
    }

    /// Build the source, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the gantry angle is not finite.
    pub fn build(self) -> Result<PhasespaceSource<R>, String> {
        if !self.gantry_angle_deg.is_finite() {
            return Err(format!(
                "gantry angle must be finite, got {}",
                self.gantry_angle_deg
            ));
        }
        Ok(PhasespaceSource {
            reader: PhasespaceReader::new(self.reader),
            recycling_number: self.recycling_number,
            redistribute: self.redistribute,
            gantry_angle_deg: self.gantry_angle_deg,
            rng: ChaCha8Rng::seed_from_u64(self.seed),
            run: self.run.unwrap_or_default(),
            current: None,
            repeat: 0,
            consumed: 0,
        })
    }
}
