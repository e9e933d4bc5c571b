//! kerma: the scoring and source-biasing layer of a Monte Carlo
//! radiotherapy dose simulation.
//!
//! An external particle-transport engine walks particles through
//! geometry step by step and invokes this crate's callbacks. kerma
//! records particles crossing scoring planes, replays and recycles the
//! recorded streams as a primary source, splits rare bremsstrahlung
//! interactions for variance reduction, bins energy deposits into a
//! voxel grid, and builds the scanner-intensity density ramp the
//! engine's material resolver consumes.
//!
//! # Quick start
//!
//! ```rust
//! use kerma::prelude::*;
//!
//! // Record one particle crossing a scoring plane...
//! let mut plane = ScoringPlane::new("exit-window", Vec::new(), 100.0, true).unwrap();
//! let track = Track::new(
//!     Vec3::new(5.0, -3.0, -300.0),
//!     Vec3::new(0.0, 0.0, -6.0),
//!     6.0,
//!     1.0,
//!     ParticleKind::Photon,
//! );
//! let mut step = Step::new(track, 0.0);
//! plane.process_step(&mut step).unwrap();
//! plane.close().unwrap();
//!
//! // ...and replay it as a primary source.
//! let stream = plane.into_inner();
//! let mut source = PhasespaceSource::builder(stream.as_slice())
//!     .recycling_number(3)
//!     .redistribute(true)
//!     .build()
//!     .unwrap();
//! match source.generate().unwrap() {
//!     SourceOutcome::Generated(primary) => assert_eq!(primary.weight, 1.0),
//!     SourceOutcome::Exhausted { .. } => unreachable!(),
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `kerma-core` | Vectors, particle kinds, tracks, steps, core traits |
//! | [`phasespace`] | `kerma-phasespace` | Record codec, scoring plane, replay source, inspector |
//! | [`split`] | `kerma-split` | Bremsstrahlung splitting variance reduction |
//! | [`score`] | `kerma-score` | Voxel dose/uncertainty accumulation |
//! | [`ramp`] | `kerma-ramp` | Scanner-intensity density ramps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`kerma-core`).
///
/// Contains [`types::Vec3`], [`types::Track`], [`types::Step`], the
/// [`types::InteractionModel`] seam, and the [`types::RunControl`]
/// abort signal.
pub use kerma_core as types;

/// Phase-space recording, replay, and inspection (`kerma-phasespace`).
///
/// Record crossings with [`phasespace::ScoringPlane`], replay them
/// with [`phasespace::PhasespaceSource`], analyze streams offline with
/// [`phasespace::PhasespaceColumns`].
pub use kerma_phasespace as phasespace;

/// Scanner-intensity density ramps (`kerma-ramp`).
///
/// Build dense material tables with [`ramp::DensityRamp`].
pub use kerma_ramp as ramp;

/// Voxel dose and uncertainty accumulation (`kerma-score`).
///
/// Bin deposits with [`score::DoseGrid`] over a validated
/// [`score::GridGeometry`].
pub use kerma_score as score;

/// Bremsstrahlung splitting variance reduction (`kerma-split`).
///
/// Wrap an interaction model with [`split::BremSplitting`]; share one
/// [`split::SplittingState`] across workers.
pub use kerma_split as split;

/// Common imports for typical kerma usage.
///
/// ```rust
/// use kerma::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use kerma_core::{
        InteractionChange, InteractionModel, ParticleKind, RunControl, Step, Track, TrackStatus,
        Vec3,
    };

    // Phase-space recording and replay
    pub use kerma_phasespace::{
        PhasespaceColumns, PhasespaceError, PhasespaceReader, PhasespaceRecord, PhasespaceSource,
        PhasespaceWriter, PrimaryVertex, ScoringPlane, SourceOutcome, SourceSelection,
    };

    // Variance reduction
    pub use kerma_split::{BremSplitting, SplittingState};

    // Voxel scoring
    pub use kerma_score::{DoseGrid, GridGeometry, ScoreError, ScoringMode};

    // Density ramps
    pub use kerma_ramp::{DensityRamp, Material, RampError, Setpoint};
}
