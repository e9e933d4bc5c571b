//! Reusable interaction-model fixtures and track builders.
//!
//! - [`FixedYieldModel`] — produces a fixed number of secondaries per
//!   invocation and counts how often it was called.
//! - [`track`] / [`step`] — compact constructors for test particles.

use kerma_core::{
    InteractionChange, InteractionModel, ParticleKind, SecondaryList, Step, Track, Vec3,
};

/// A test track at the origin travelling along −z.
pub fn track(kind: ParticleKind, kinetic_energy: f64, weight: f64) -> Track {
    Track::new(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -1.0),
        kinetic_energy,
        weight,
        kind,
    )
}

/// A step event for `track` depositing `energy_deposit`.
pub fn step(track: Track, energy_deposit: f64) -> Step {
    Step::new(track, energy_deposit)
}

/// Produces exactly `yield_per_call` photon secondaries per invocation.
///
/// Secondaries are created with unit weight so tests can observe the
/// weights a biasing wrapper assigns. Energies are deterministic:
/// secondary `i` of invocation `n` carries `0.1 * (n * yield + i + 1)`
/// so callers can assert ordering.
#[derive(Debug)]
pub struct FixedYieldModel {
    yield_per_call: usize,
    invocations: usize,
}

impl FixedYieldModel {
    /// Create a model yielding `yield_per_call` secondaries per call.
    pub fn new(yield_per_call: usize) -> Self {
        Self {
            yield_per_call,
            invocations: 0,
        }
    }

    /// How many times `post_step` has been invoked.
    pub fn invocations(&self) -> usize {
        self.invocations
    }
}

impl InteractionModel for FixedYieldModel {
    fn name(&self) -> &str {
        "FixedYieldModel"
    }

    fn post_step(&mut self, track: &Track, _step: &Step) -> InteractionChange {
        let n = self.invocations;
        self.invocations += 1;

        let mut secondaries = SecondaryList::new();
        for i in 0..self.yield_per_call {
            let energy = 0.1 * (n * self.yield_per_call + i + 1) as f64;
            secondaries.push(Track::new(
                track.position,
                track.momentum,
                energy,
                1.0,
                ParticleKind::Photon,
            ));
        }

        // Primary loses a little energy per invocation so tests can
        // distinguish which invocation's state survived.
        let mut primary = *track;
        primary.kinetic_energy = track.kinetic_energy - 0.01 * (n + 1) as f64;

        InteractionChange {
            primary,
            secondaries,
            weights_assigned: false,
        }
    }
}
