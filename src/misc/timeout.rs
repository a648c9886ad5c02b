/*!
Cooperative interruption of a solve.

The expander polls [should_abort](Timeout::should_abort) at the top of every
branching loop iteration and unwinds promptly when it fires, so an abort
costs at most one node of work.
An aborted run is not an error: the runner returns the best incumbent found
together with an [Aborted](crate::reports::Report::Aborted) report.

[WallClockTimeout] is the standard implementation.
Anything else --- a node budget, a solution callback, a cancellation token
--- only needs to implement the trait.
*/

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Polled by the expander for cooperative interruption.
pub trait Timeout {
    /// Whether the search should stop and return the incumbent.
    fn should_abort(&self) -> bool;
}

/// A timeout measured from construction, with an external abort trigger.
pub struct WallClockTimeout {
    start: Instant,
    limit: Option<Duration>,
    triggered: AtomicBool,
}

impl WallClockTimeout {
    /// A timeout which fires once `limit` has elapsed, if given a limit.
    pub fn new(limit: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            limit,
            triggered: AtomicBool::new(false),
        }
    }

    /// A timeout which never fires on its own.
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Requests an abort from outside the search, e.g. a signal handler.
    pub fn trigger_early_abort(&self) {
        self.triggered.store(true, Ordering::Relaxed);
    }
}

impl Default for WallClockTimeout {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl Timeout for WallClockTimeout {
    fn should_abort(&self) -> bool {
        if self.triggered.load(Ordering::Relaxed) {
            return true;
        }

        match self.limit {
            Some(limit) if self.start.elapsed() >= limit => {
                // latch, so later polls skip the clock
                self.triggered.store(true, Ordering::Relaxed);
                true
            }

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_fires() {
        let timeout = WallClockTimeout::unlimited();
        assert!(!timeout.should_abort());
    }

    #[test]
    fn triggered_fires() {
        let timeout = WallClockTimeout::unlimited();
        timeout.trigger_early_abort();
        assert!(timeout.should_abort());
    }

    #[test]
    fn elapsed_fires() {
        let timeout = WallClockTimeout::new(Some(Duration::from_secs(0)));
        assert!(timeout.should_abort());
        assert!(timeout.should_abort());
    }
}
