//! Bremsstrahlung splitting variance reduction.
//!
//! Bremsstrahlung photon production is rare but carries most of the
//! clinically interesting signal in a photon-beam simulation. The
//! [`BremSplitting`] wrapper increases the yield of such interactions
//! without biasing the simulated dose: it runs the underlying
//! interaction model N times per real interaction and assigns each
//! resulting secondary a statistical weight reduced by 1/N, so the
//! expected total weight is conserved.
//!
//! The run-wide toggle and secondary tally live in [`SplittingState`],
//! an explicitly owned object shared between wrapper instances — one
//! logical switch for the whole run, no hidden globals.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod process;
mod state;

pub use process::{BremSplitting, BremSplittingBuilder};
pub use state::SplittingState;
