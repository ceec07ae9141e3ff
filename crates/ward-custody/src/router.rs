//! Payout destination resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ward_core::{Address, GuardError};
use ward_guard::RecoveryQuery;

/// Errors surfaced by custody operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum CustodyError {
    /// Recovery is active but no recovery wallet is bound. The payout must
    /// fail rather than pay the compromised principal.
    #[error("Recovery is active for {principal} but no recovery wallet is bound")]
    RecoveryWalletUnset {
        /// The principal whose configuration is incomplete.
        principal: Address,
    },

    /// The guard query itself failed.
    #[error(transparent)]
    Guard(#[from] GuardError),

    /// The ledger backend rejected the credit.
    #[error("Ledger error: {message}")]
    Ledger {
        /// Description of the backend failure.
        message: String,
    },
}

/// Resolves where a payout addressed to a principal must actually go.
#[derive(Debug, Clone)]
pub struct PayoutRouter<Q> {
    guard: Q,
}

impl<Q: RecoveryQuery> PayoutRouter<Q> {
    /// Create a router over a guard query implementation.
    pub fn new(guard: Q) -> Self {
        Self { guard }
    }

    /// The destination for a payout addressed to `payee`.
    ///
    /// Pays the payee directly unless recovery mode is active, in which
    /// case the bound recovery wallet is returned instead.
    pub fn resolve(&self, payee: Address) -> Result<Address, CustodyError> {
        if !self.guard.is_recovery_active(&payee)? {
            return Ok(payee);
        }
        match self.guard.recovery_wallet(&payee)? {
            Some(wallet) => {
                debug!(principal = %payee, wallet = %wallet, "payout redirected to recovery wallet");
                Ok(wallet)
            }
            None => Err(CustodyError::RecoveryWalletUnset { principal: payee }),
        }
    }
}
