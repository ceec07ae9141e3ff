//! Timestamps and the clock abstraction.
//!
//! The guard only needs wall-clock time for the one-time grace window, so
//! the surface is deliberately small: a millisecond unix timestamp and a
//! trait that supplies "now". Injecting the clock keeps grace-window
//! behavior deterministic under test.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create from unix milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Unix milliseconds value.
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero
    /// if the clock went backwards.
    pub fn millis_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Timestamp(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_since_saturates() {
        let earlier = Timestamp::from_millis(100);
        let later = Timestamp::from_millis(250);
        assert_eq!(later.millis_since(earlier), 150);
        assert_eq!(earlier.millis_since(later), 0);
    }

    #[test]
    fn system_clock_is_nonzero() {
        assert!(SystemClock.now().as_millis() > 0);
    }
}
