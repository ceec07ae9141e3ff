//! Unified error system for guard operations.
//!
//! Every failure rejects the requested operation as a whole; the guard
//! never applies partial state. Variants map one-to-one onto the
//! preconditions of the rotation protocol so callers can react precisely
//! (and so tests can assert the exact failure).

use serde::{Deserialize, Serialize};

/// Errors surfaced by guard operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum GuardError {
    /// Operation requires a code commitment that was never initialized.
    #[error("No authorization code has been set for this principal")]
    CodeNotSet,

    /// Attempt to initialize a commitment when one already exists.
    #[error("An authorization code is already set for this principal")]
    CodeAlreadySet,

    /// Presented code fails the length/character-set check. Checked before
    /// any hashing so malformed input is rejected fast.
    #[error("Presented code is malformed")]
    InvalidCodeFormat,

    /// Presented code does not match the stored commitment, or the proposed
    /// replacement commitment is unusable (equal to the current one).
    #[error("Presented code or replacement commitment is invalid")]
    InvalidCode,

    /// Operation requires a recovery wallet that has not been bound.
    #[error("No recovery wallet has been set for this principal")]
    RecoveryWalletNotSet,

    /// Initial wallet binding attempted when one is already bound.
    #[error("A recovery wallet is already set for this principal")]
    RecoveryWalletAlreadySet,

    /// Activation attempted while recovery mode is already on.
    #[error("Recovery mode is already active")]
    RecoveryModeAlreadyActive,

    /// Deactivation attempted while recovery mode is off.
    #[error("Recovery mode is not active")]
    NotInRecoveryMode,

    /// Supplied wallet address is structurally unacceptable.
    #[error("Invalid recovery wallet: {reason}")]
    InvalidRecoveryWallet {
        /// Why the address was rejected (zero address, self-reference).
        reason: String,
    },

    /// One-time correction attempted after the grace window closed.
    #[error("The code-correction grace period has expired")]
    GracePeriodExpired,

    /// One-time correction attempted a second time.
    #[error("The one-time code correction has already been used")]
    CodeAlreadyChanged,

    /// Backing store failure.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the backend failure.
        message: String,
    },
}

impl GuardError {
    /// Create an invalid-recovery-wallet error.
    pub fn invalid_wallet(reason: impl Into<String>) -> Self {
        Self::InvalidRecoveryWallet {
            reason: reason.into(),
        }
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Standard Result type for guard operations.
pub type Result<T> = std::result::Result<T, GuardError>;
