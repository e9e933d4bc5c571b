//! The scoring-plane recorder.

use std::io::Write;

use kerma_core::Step;

use crate::error::PhasespaceError;
use crate::record::PhasespaceRecord;
use crate::writer::PhasespaceWriter;

/// Fraction of the nominal plane half-width actually accepted.
///
/// The acceptance region is shrunk by 1% relative to the geometric
/// plane so that boundary floating-point states fall deterministically
/// inside or outside, never exactly on the edge.
const ACCEPTANCE_SHRINK: f64 = 0.99;

/// Observes particles crossing a scoring plane and persists their
/// state, optionally removing them from further transport.
///
/// The plane is square with half-width `radius`, transverse to the
/// beam (`x`/`y` in-plane). A crossing particle within the shrunk
/// acceptance is snapshotted into a [`PhasespaceRecord`] and appended
/// to the stream in strict arrival order; out-of-acceptance crossings
/// are discarded and counted.
pub struct ScoringPlane<W: Write> {
    name: String,
    writer: PhasespaceWriter<W>,
    acceptance: f64,
    kill_at_plane: bool,
    discarded: u64,
}

impl<W: Write> ScoringPlane<W> {
    /// Create a scoring plane writing to `sink`.
    ///
    /// `radius` is the nominal geometric half-width; the acceptance
    /// check uses 99% of it. When `kill_at_plane` is set, recorded
    /// particles are terminated so the transport engine performs no
    /// further stepping for them (avoiding double-counting across the
    /// boundary).
    ///
    /// # Errors
    ///
    /// Returns `Err` if `radius` is not finite and positive.
    pub fn new(
        name: impl Into<String>,
        sink: W,
        radius: f64,
        kill_at_plane: bool,
    ) -> Result<Self, String> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(format!("plane radius must be finite and > 0, got {radius}"));
        }
        Ok(Self {
            name: name.into(),
            writer: PhasespaceWriter::new(sink),
            acceptance: radius * ACCEPTANCE_SHRINK,
            kill_at_plane,
            discarded: 0,
        })
    }

    /// Plane name, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle one per-step event delivered by the transport engine.
    ///
    /// Returns `Ok(true)` if a record was appended, `Ok(false)` if the
    /// crossing was outside the acceptance and discarded. Recorded
    /// particles are killed when the plane is configured to do so.
    ///
    /// # Errors
    ///
    /// Stream I/O failures and writes after [`close`](Self::close)
    /// propagate; they are fatal for this plane.
    pub fn process_step(&mut self, step: &mut Step) -> Result<bool, PhasespaceError> {
        let position = step.track.position;
        if position.x.abs() > self.acceptance || position.y.abs() > self.acceptance {
            self.discarded += 1;
            return Ok(false);
        }

        let record = PhasespaceRecord::from_track(&step.track);
        self.writer.write_record(&record)?;

        if self.kill_at_plane {
            step.track.kill();
        }
        Ok(true)
    }

    /// Number of records appended so far.
    pub fn records_written(&self) -> u64 {
        self.writer.records_written()
    }

    /// Number of out-of-acceptance crossings discarded so far.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Flush and close the underlying stream. Idempotent.
    pub fn close(&mut self) -> Result<(), PhasespaceError> {
        self.writer.close()
    }

    /// Consume the plane and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
