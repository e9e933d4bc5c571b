//! Core types and traits for the kerma scoring framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by the scoring and source-biasing
//! crates: 3-vectors, particle species, track and step state, the
//! wrapped interaction-model trait, and the run-wide abort signal.
//!
//! The transport physics itself — cross-sections, stepping, geometry —
//! lives in an external engine that drives these types through callback
//! seams.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod interaction;
pub mod particle;
pub mod run;
pub mod vector;

pub use interaction::{InteractionChange, InteractionModel, SecondaryList};
pub use particle::{ParticleKind, Step, Track, TrackStatus};
pub use run::RunControl;
pub use vector::Vec3;
