//! Guard runtime configuration.

/// Default grace window for the one-time code correction: 24 hours.
pub const DEFAULT_GRACE_WINDOW_MS: u64 = 24 * 60 * 60 * 1000;

/// Tunable guard behavior.
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// How long after initialization the one-time, code-free correction
    /// remains available, in milliseconds.
    pub grace_window_ms: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            grace_window_ms: DEFAULT_GRACE_WINDOW_MS,
        }
    }
}
