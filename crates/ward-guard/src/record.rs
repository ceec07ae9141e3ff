//! Per-principal persistent record.

use serde::{Deserialize, Serialize};
use ward_core::{Address, Commitment, Salt, Timestamp};

/// Recovery state persisted for one principal.
///
/// A record springs into existence on the first code initialization and is
/// never deleted. Each rotation-gated operation mutates at most one of the
/// wallet/mode/compromised fields and always replaces the commitment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalRecord {
    /// Destination for redirected payouts while recovery mode is active.
    pub recovery_wallet: Option<Address>,
    /// Commitment to the current one-time code; `None` means uninitialized.
    pub commitment: Option<Commitment>,
    /// Public per-principal randomness mixed into the commitment preimage.
    /// Registered at initialization, immutable afterwards.
    pub salt: Option<Salt>,
    /// Whether payouts to this principal must be redirected.
    pub recovery_active: bool,
    /// Permanent audit marker; set on first activation and never cleared
    /// by this module.
    pub compromised: bool,
    /// When the first commitment was stored; anchors the grace window.
    pub code_set_at: Option<Timestamp>,
    /// Whether the one-time grace correction has been used.
    pub code_corrected: bool,
}

impl PrincipalRecord {
    /// Read-only snapshot for operator UX.
    pub fn status(&self) -> GuardStatus {
        GuardStatus {
            code_initialized: self.commitment.is_some(),
            wallet_bound: self.recovery_wallet.is_some(),
            recovery_active: self.recovery_active,
            compromised: self.compromised,
        }
    }
}

/// Condensed view of a principal's guard state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardStatus {
    /// Whether an authorization code commitment exists.
    pub code_initialized: bool,
    /// Whether a recovery wallet is bound.
    pub wallet_bound: bool,
    /// Whether payouts are currently redirected.
    pub recovery_active: bool,
    /// Whether the principal has ever been marked compromised.
    pub compromised: bool,
}
