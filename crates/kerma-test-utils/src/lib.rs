//! Test utilities and mock types for kerma development.
//!
//! Not published; consumed as a dev-dependency by the workspace crates.

#![forbid(unsafe_code)]

mod fixtures;

pub use fixtures::{step, track, FixedYieldModel};
