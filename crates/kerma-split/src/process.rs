//! The splitting wrapper around an underlying interaction model.

use crate::state::SplittingState;
use kerma_core::{InteractionChange, InteractionModel, SecondaryList, Step, Track};
use std::sync::Arc;

/// Wraps an [`InteractionModel`] and splits its interactions.
///
/// When the shared [`SplittingState`] is active, each call to
/// [`post_step`](BremSplitting::post_step) invokes the wrapped model
/// `split_factor` times, collects every secondary produced, and sets
/// each secondary's weight to `track.weight / split_factor`. The
/// combined change is marked `weights_assigned` so downstream
/// accounting does not re-normalize. The primary's post-interaction
/// state is taken from the last invocation — splitting concerns
/// secondary yield, not primary continuation.
///
/// When inactive, the wrapped model is invoked exactly once and its
/// change passes through unchanged apart from the secondary tally.
///
/// Constructed via [`BremSplitting::builder`].
#[derive(Debug)]
pub struct BremSplitting<P> {
    inner: P,
    split_factor: u32,
    state: Arc<SplittingState>,
}

/// Builder for [`BremSplitting`].
///
/// Required: the wrapped model and the shared state. `split_factor`
/// defaults to 10 and must be at least 1.
pub struct BremSplittingBuilder<P> {
    inner: P,
    split_factor: u32,
    state: Arc<SplittingState>,
}

impl<P: InteractionModel> BremSplitting<P> {
    /// Create a builder wrapping `inner` with the shared run state.
    pub fn builder(inner: P, state: Arc<SplittingState>) -> BremSplittingBuilder<P> {
        BremSplittingBuilder {
            inner,
            split_factor: 10,
            state,
        }
    }

    /// The configured split factor N.
    pub fn split_factor(&self) -> u32 {
        self.split_factor
    }

    /// The shared run state.
    pub fn state(&self) -> &Arc<SplittingState> {
        &self.state
    }

    /// Run the wrapped interaction, splitting it if the run state is
    /// active.
    pub fn post_step(&mut self, track: &Track, step: &Step) -> InteractionChange {
        if !self.state.is_active() {
            let change = self.inner.post_step(track, step);
            self.state.tally_secondaries(change.secondaries.len() as u64);
            return change;
        }

        let weight = track.weight / f64::from(self.split_factor);

        let mut secondaries = SecondaryList::new();
        let mut last = self.inner.post_step(track, step);
        secondaries.extend(last.secondaries.drain(..));
        for _ in 1..self.split_factor {
            last = self.inner.post_step(track, step);
            secondaries.extend(last.secondaries.drain(..));
        }

        for secondary in secondaries.iter_mut() {
            secondary.weight = weight;
        }
        self.state.tally_secondaries(secondaries.len() as u64);

        InteractionChange {
            primary: last.primary,
            secondaries,
            weights_assigned: true,
        }
    }
}

impl<P: InteractionModel> BremSplittingBuilder<P> {
    /// Set the split factor N (default 10). Must be >= 1.
    pub fn split_factor(mut self, n: u32) -> Self {
        self.split_factor = n;
        self
    }

    /// Build the wrapper, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `split_factor` is 0.
    pub fn build(self) -> Result<BremSplitting<P>, String> {
        if self.split_factor == 0 {
            return Err("split_factor must be at least 1".to_string());
        }
        Ok(BremSplitting {
            inner: self.inner,
            split_factor: self.split_factor,
            state: self.state,
        })
    }
}
