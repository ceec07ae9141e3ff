//! Manually advanced clock for deterministic time-dependent tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use ward_core::{Clock, Timestamp};

/// Clock whose time only moves when the test says so.
///
/// Clones share the same underlying time, so a test can hand one handle to
/// the service under test and keep another to advance time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at the given unix-millisecond time.
    pub fn starting_at(millis: u64) -> Self {
        Self {
            now_ms: Arc::new(AtomicU64::new(millis)),
        }
    }

    /// Move time forward.
    pub fn advance_ms(&self, millis: u64) {
        self.now_ms.fetch_add(millis, Ordering::SeqCst);
    }

    /// Jump to an absolute time.
    pub fn set_ms(&self, millis: u64) {
        self.now_ms.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.now_ms.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_time() {
        let clock = ManualClock::starting_at(1_000);
        let handle = clock.clone();
        handle.advance_ms(500);
        assert_eq!(clock.now(), Timestamp::from_millis(1_500));
    }
}
