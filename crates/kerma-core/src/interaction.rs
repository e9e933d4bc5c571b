//! The wrapped interaction-model seam.
//!
//! The splitting wrapper in `kerma-split` does not model any physics of
//! its own: it multiplies invocations of an underlying interaction model
//! supplied by the transport engine. [`InteractionModel`] is that seam.

use crate::particle::{Step, Track};
use smallvec::SmallVec;

/// Secondaries produced by one interaction. Inline capacity covers the
/// common case of a handful of secondaries per invocation; larger yields
/// spill to the heap transparently.
pub type SecondaryList = SmallVec<[Track; 4]>;

/// The outcome of one interaction-model invocation.
///
/// Mirrors what a transport engine reports after an interaction: the
/// primary's post-interaction state, the secondaries created, and whether
/// their statistical weights were already assigned by a biasing process
/// (in which case downstream accounting must not re-normalize them).
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionChange {
    /// Post-interaction state of the primary track.
    pub primary: Track,
    /// Secondaries created by the interaction.
    pub secondaries: SecondaryList,
    /// Set when a biasing process has already assigned the secondaries'
    /// weights; downstream weight accounting leaves them untouched.
    pub weights_assigned: bool,
}

impl InteractionChange {
    /// An interaction that produced no secondaries and left the primary
    /// as given.
    pub fn none(primary: Track) -> Self {
        Self {
            primary,
            secondaries: SecondaryList::new(),
            weights_assigned: false,
        }
    }
}

/// A physical interaction model capable of producing zero or more
/// secondaries per invocation.
///
/// Implementations are supplied by the transport engine (the real
/// bremsstrahlung model) or by test fixtures. The contract is total: an
/// invocation always yields an [`InteractionChange`] — there is no null
/// outcome to check for.
pub trait InteractionModel {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Run the interaction for `track` over `step`.
    fn post_step(&mut self, track: &Track, step: &Step) -> InteractionChange;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleKind;
    use crate::vector::Vec3;

    #[test]
    fn none_produces_no_secondaries() {
        let track = Track::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 6.0, 1.0, ParticleKind::Electron);
        let change = InteractionChange::none(track);
        assert!(change.secondaries.is_empty());
        assert!(!change.weights_assigned);
        assert_eq!(change.primary, track);
    }
}
