//! Run-wide abort signalling.

use std::sync::atomic::{AtomicBool, Ordering};

/// The engine-level "abort run" signal.
///
/// The phase-space source raises this when its input stream is
/// exhausted; every scoring component honors it by ceasing per-step
/// work for the remainder of the run. Shared across workers via
/// `Arc<RunControl>`.
///
/// # Examples
///
/// ```
/// use kerma_core::RunControl;
///
/// let run = RunControl::new();
/// assert!(!run.is_aborted());
/// run.request_abort();
/// assert!(run.is_aborted());
/// run.clear();
/// assert!(!run.is_aborted());
/// ```
#[derive(Debug, Default)]
pub struct RunControl {
    aborted: AtomicBool,
}

impl RunControl {
    /// Create a control handle with no abort pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an orderly abort of the current run.
    pub fn request_abort(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }

    /// Whether an abort has been requested.
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Relaxed)
    }

    /// Clear the abort flag between runs. State owned by workers is
    /// reset, not recreated, when runs repeat in one process.
    pub fn clear(&self) {
        self.aborted.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn abort_visible_across_clones_of_the_handle() {
        let run = Arc::new(RunControl::new());
        let other = Arc::clone(&run);
        other.request_abort();
        assert!(run.is_aborted());
    }
}
