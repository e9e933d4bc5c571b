//! Run-wide splitting state shared between wrapper instances.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// The process-wide splitting toggle and secondary tally.
///
/// Workers each own their wrapper instance but share one
/// `Arc<SplittingState>`, preserving the original "one logical toggle
/// for the whole run" semantics. The tally is write-rarely/read-often;
/// `Relaxed` ordering is sufficient — no other memory depends on it.
///
/// # Examples
///
/// ```
/// use kerma_split::SplittingState;
///
/// let state = SplittingState::new();
/// assert!(state.is_active());
/// state.set_active(false);
/// assert!(!state.is_active());
/// assert_eq!(state.secondaries_produced(), 0);
/// ```
#[derive(Debug)]
pub struct SplittingState {
    active: AtomicBool,
    secondaries: AtomicU64,
}

impl SplittingState {
    /// Create a state with splitting active and a zero tally.
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(true),
            secondaries: AtomicU64::new(0),
        }
    }

    /// Whether splitting is active for the run.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Toggle splitting for every wrapper sharing this state.
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    /// Total secondaries produced across all wrappers sharing this
    /// state, for the lifetime of the state.
    pub fn secondaries_produced(&self) -> u64 {
        self.secondaries.load(Ordering::Relaxed)
    }

    pub(crate) fn tally_secondaries(&self, count: u64) {
        self.secondaries.fetch_add(count, Ordering::Relaxed);
    }
}

impl Default for SplittingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn tally_accumulates_across_shared_handles() {
        let state = Arc::new(SplittingState::new());
        let other = Arc::clone(&state);
        state.tally_secondaries(3);
        other.tally_secondaries(4);
        assert_eq!(state.secondaries_produced(), 7);
    }
}
