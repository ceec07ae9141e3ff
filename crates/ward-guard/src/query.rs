//! Read-only query surface for fund-custody consumers.
//!
//! Custody code depends on this trait alone, never on a concrete store or
//! service, so it can be tested against a stub guard.

use crate::service::GuardService;
use crate::store::GuardStore;
use ward_core::{Address, Clock, Result};

/// The two lookups fund-custody logic needs before paying a principal.
pub trait RecoveryQuery: Send + Sync {
    /// Whether payouts to this principal must be redirected.
    fn is_recovery_active(&self, principal: &Address) -> Result<bool>;

    /// The principal's designated recovery wallet, if bound.
    fn recovery_wallet(&self, principal: &Address) -> Result<Option<Address>>;
}

impl<S: GuardStore, C: Clock> RecoveryQuery for GuardService<S, C> {
    fn is_recovery_active(&self, principal: &Address) -> Result<bool> {
        Ok(self.status(principal)?.recovery_active)
    }

    fn recovery_wallet(&self, principal: &Address) -> Result<Option<Address>> {
        self.wallet_of(principal)
    }
}
