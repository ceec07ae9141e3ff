//! Ward Core - Foundation Types
//!
//! This crate provides the foundational types shared by the Ward recovery
//! guard and its consumers. It contains only pure data types and algorithms
//! with no storage or service logic.
//!
//! ## What Belongs Here
//!
//! - Principal addresses and their textual encoding
//! - One-time authorization codes: format checking and canonicalization
//! - Commitments and salts, and the single hash algorithm that binds them
//! - Timestamps and the injectable clock abstraction
//! - The unified guard error taxonomy
//!
//! ## What Does NOT Belong Here
//!
//! - Persistent record storage (belongs in ward-guard)
//! - Rotation-gated state transitions (belong in ward-guard)
//! - Payout routing (belongs in ward-custody)

#![forbid(unsafe_code)]

/// Principal addresses and textual encoding
pub mod address;

/// One-time authorization codes: format and canonicalization
pub mod code;

/// Commitments, salts, and commitment construction
pub mod commitment;

/// Unified error handling
pub mod error;

/// Centralized hash algorithm
pub mod hash;

/// Timestamps and clock abstraction
pub mod time;

pub use address::Address;
pub use code::{AuthCode, CanonicalCode, CODE_LEN};
pub use commitment::{Commitment, Salt};
pub use error::{GuardError, Result};
pub use time::{Clock, SystemClock, Timestamp};
