//! Stub implementation of the recovery query trait.

use parking_lot::Mutex;
use std::collections::HashMap;
use ward_core::{Address, Result};
use ward_guard::RecoveryQuery;

#[derive(Debug, Clone, Copy, Default)]
struct StubState {
    active: bool,
    wallet: Option<Address>,
}

/// Scriptable guard for custody tests: recovery state is set directly
/// instead of going through the rotation protocol.
#[derive(Debug, Default)]
pub struct StubGuard {
    state: Mutex<HashMap<Address, StubState>>,
}

impl StubGuard {
    /// Create an empty stub; every principal reports inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the recovery-active flag for a principal.
    pub fn set_active(&self, principal: Address, active: bool) {
        self.state.lock().entry(principal).or_default().active = active;
    }

    /// Script the bound recovery wallet for a principal.
    pub fn set_wallet(&self, principal: Address, wallet: Option<Address>) {
        self.state.lock().entry(principal).or_default().wallet = wallet;
    }
}

impl RecoveryQuery for StubGuard {
    fn is_recovery_active(&self, principal: &Address) -> Result<bool> {
        Ok(self
            .state
            .lock()
            .get(principal)
            .map(|s| s.active)
            .unwrap_or(false))
    }

    fn recovery_wallet(&self, principal: &Address) -> Result<Option<Address>> {
        Ok(self.state.lock().get(principal).and_then(|s| s.wallet))
    }
}
