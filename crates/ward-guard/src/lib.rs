//! Ward Guard - Recovery Guard State Machine
//!
//! This crate implements the recovery guard: a keyed state machine that
//! protects each registered principal with a rotating single-use
//! authorization code, and exposes a narrow read API that fund-custody
//! code consults to redirect payouts once recovery mode is active.
//!
//! ## Rotation protocol
//!
//! Every sensitive mutation is gated by proof-of-knowledge of the current
//! one-time code and atomically installs the caller's replacement
//! commitment. A consumed code can never be replayed: success replaces the
//! commitment, failure leaves all state untouched.
//!
//! ## Atomicity
//!
//! The read-validate-rotate sequence runs inside a single
//! [`store::GuardStore::update`] transaction per principal, so two racing
//! rotation attempts against the same principal cannot both succeed
//! against the same presented code. Operations on different principals
//! are independent.
//!
//! ## What Belongs Here
//!
//! - The per-principal persistent record and its snapshot view
//! - The storage abstraction and the in-memory store
//! - The rotation-gated operation set and grace-period correction
//! - The [`RecoveryQuery`] trait consumed by custody code
//!
//! ## What Does NOT Belong Here
//!
//! - Payout routing and ledger mutation (ward-custody)
//! - Code canonicalization and hashing (ward-core)

#![forbid(unsafe_code)]

/// Guard runtime configuration
pub mod config;

/// Read-only query surface for fund-custody consumers
pub mod query;

/// Per-principal persistent record
pub mod record;

/// Rotation-gated guard operations
pub mod service;

/// Storage abstraction and in-memory store
pub mod store;

pub use config::{GuardConfig, DEFAULT_GRACE_WINDOW_MS};
pub use query::RecoveryQuery;
pub use record::{GuardStatus, PrincipalRecord};
pub use service::GuardService;
pub use store::{GuardStore, MemoryGuardStore};

// Core error types
pub use ward_core::{GuardError, Result};
