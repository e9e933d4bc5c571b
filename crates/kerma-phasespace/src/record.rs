//! The phase-space record value type.

use kerma_core::{ParticleKind, Track, Vec3};

/// Size of one encoded record on the wire: 8 doubles and one i32,
/// no padding.
pub const RECORD_BYTES: usize = 8 * 8 + 4;

/// An immutable snapshot of one particle crossing a scoring plane.
///
/// Created at the instant a tracked particle crosses the plane, written
/// once to a stream, and later read back for replay. Never mutated.
///
/// Invariants maintained by producers: `weight > 0` and
/// `kinetic_energy >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhasespaceRecord {
    /// Position at the crossing (length units).
    pub position: Vec3,
    /// Momentum vector — direction and magnitude together.
    pub momentum: Vec3,
    /// Kinetic energy.
    pub kinetic_energy: f64,
    /// Statistical weight.
    pub weight: f64,
    /// Particle species.
    pub kind: ParticleKind,
}

impl PhasespaceRecord {
    /// Snapshot a track's state at a plane crossing.
    pub fn from_track(track: &Track) -> Self {
        Self {
            position: track.position,
            momentum: track.momentum,
            kinetic_energy: track.kinetic_energy,
            weight: track.weight,
            kind: track.kind,
        }
    }
}

impl From<&Track> for PhasespaceRecord {
    fn from(track: &Track) -> Self {
        Self::from_track(track)
    }
}
