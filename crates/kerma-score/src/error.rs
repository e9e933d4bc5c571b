//! Error types for grid construction.

use std::fmt;

/// Errors arising from voxel-grid configuration.
///
/// All variants are configuration violations: they surface at
/// construction time, before any simulation work begins.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// An axis has zero voxels.
    EmptyAxis {
        /// Axis name (`"x"`, `"y"`, or `"z"`).
        axis: &'static str,
    },
    /// An axis has non-increasing or non-finite bounds.
    InvalidBounds {
        /// Axis name (`"x"`, `"y"`, or `"z"`).
        axis: &'static str,
        /// Lower bound supplied.
        min: f64,
        /// Upper bound supplied.
        max: f64,
    },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAxis { axis } => {
                write!(f, "{axis} axis must have at least one voxel")
            }
            Self::InvalidBounds { axis, min, max } => {
                write!(
                    f,
                    "{axis} axis bounds must be finite with min < max, got [{min}, {max})"
                )
            }
        }
    }
}

impl std::error::Error for ScoreError {}
