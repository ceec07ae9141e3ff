//! Ward Testkit - Shared Test Infrastructure
//!
//! Deterministic fixtures for exercising the guard and its consumers:
//! well-formed codes and their commitments, a manually advanced clock for
//! grace-window tests, a stub guard for custody tests, and pre-wired
//! in-memory guard services.
//!
//! This crate is a dev-dependency of the other workspace members; nothing
//! here ships in production builds.

#![forbid(unsafe_code)]

/// Manually advanced clock
pub mod clock;

/// Deterministic codes, commitments, and addresses
pub mod fixtures;

/// Stub implementation of the recovery query trait
pub mod stub;

pub use clock::ManualClock;
pub use fixtures::{address, code, commitment, manual_guard, CODE_ONE, CODE_THREE, CODE_TWO};
pub use stub::StubGuard;

/// Install a fmt subscriber honoring `RUST_LOG` for test debugging.
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
