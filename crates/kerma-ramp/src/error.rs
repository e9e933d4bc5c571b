//! Error types for ramp construction.

use std::fmt;

/// Errors arising from density-ramp configuration.
///
/// All variants are configuration violations surfaced before any
/// simulation work begins.
#[derive(Debug, Clone, PartialEq)]
pub enum RampError {
    /// No setpoints were supplied.
    NoSetpoints,
    /// Setpoint intensities are not strictly increasing.
    NonIncreasingSetpoints {
        /// Index of the offending setpoint.
        index: usize,
        /// Intensity of the preceding setpoint.
        previous: i32,
        /// The offending intensity.
        value: i32,
    },
    /// The discretization increment is zero or negative.
    NonPositiveIncrement {
        /// The offending increment.
        increment: i32,
    },
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSetpoints => write!(f, "ramp requires at least one setpoint"),
            Self::NonIncreasingSetpoints {
                index,
                previous,
                value,
            } => {
                write!(
                    f,
                    "setpoint {index} intensity {value} does not increase past {previous}"
                )
            }
            Self::NonPositiveIncrement { increment } => {
                write!(f, "increment must be positive, got {increment}")
            }
        }
    }
}

impl std::error::Error for RampError {}
