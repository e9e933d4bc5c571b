//! Scanner-intensity to material-density ramp building.
//!
//! A scanned patient volume arrives as per-voxel scanner intensities
//! (Hounsfield-like values). The transport engine resolves each voxel
//! to a concrete material through a dense lookup table built here from
//! a sparse set of calibration setpoints, with piecewise-linear density
//! interpolation between them.
//!
//! Building the table is a pure function: the same setpoints and
//! increment always yield the same map.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod material;
mod ramp;

pub use error::RampError;
pub use material::Material;
pub use ramp::{DensityRamp, Setpoint};
