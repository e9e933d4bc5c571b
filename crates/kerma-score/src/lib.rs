//! Voxel dose and uncertainty accumulation.
//!
//! Bins per-step energy deposits into a fixed 3-D grid, accumulating
//! first and second moments of deposit plus weighted event counts per
//! voxel — the inputs for dose and statistical-uncertainty estimates.
//!
//! Grid geometry is fixed at construction and validated fail-fast;
//! per-event out-of-range positions are silently discarded (and
//! counted), since particles legitimately deposit outside the scoring
//! volume in normal operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod geometry;
mod grid;

pub use error::ScoreError;
pub use geometry::GridGeometry;
pub use grid::{DoseGrid, ScoringMode, Voxel};
