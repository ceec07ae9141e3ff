//! Rotation-gated guard operations.
//!
//! Every sensitive operation follows the same shape: load the principal's
//! record inside a store transaction, check the state preconditions,
//! validate the presented code against the stored commitment, apply the
//! primary effect, and install the replacement commitment. All of it
//! commits or none of it does.

use crate::config::GuardConfig;
use crate::record::{GuardStatus, PrincipalRecord};
use crate::store::GuardStore;
use tracing::{debug, info};
use ward_core::{Address, AuthCode, Clock, Commitment, GuardError, Result, Salt, SystemClock};

/// Guard service over a backing store and an injected clock.
#[derive(Debug, Clone)]
pub struct GuardService<S, C = SystemClock> {
    store: S,
    clock: C,
    config: GuardConfig,
}

impl<S: GuardStore> GuardService<S> {
    /// Create a service on the system clock with default configuration.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: GuardStore, C: Clock> GuardService<S, C> {
    /// Create a service with an explicit clock (deterministic tests).
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            config: GuardConfig::default(),
        }
    }

    /// Override the default configuration.
    pub fn with_config(mut self, config: GuardConfig) -> Self {
        self.config = config;
        self
    }

    /// Access the backing store (record inspection in tests and tooling).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Set the initial code commitment for a principal, optionally
    /// registering an immutable public salt for the preimage.
    ///
    /// The record springs into existence here; there is no separate
    /// registration step and no deletion.
    pub fn initialize_code(
        &self,
        principal: Address,
        commitment: Commitment,
        salt: Option<Salt>,
    ) -> Result<()> {
        if commitment.is_zero() {
            return Err(GuardError::InvalidCode);
        }
        let now = self.clock.now();
        self.store.update(&principal, |slot| {
            let record = slot.get_or_insert_with(PrincipalRecord::default);
            if record.commitment.is_some() {
                return Err(GuardError::CodeAlreadySet);
            }
            record.commitment = Some(commitment);
            record.salt = salt;
            record.code_set_at = Some(now);
            Ok(())
        })?;
        debug!(principal = %principal, "authorization code initialized");
        Ok(())
    }

    /// One-time binding of the recovery wallet, gated by the current code.
    pub fn set_recovery_wallet(
        &self,
        principal: Address,
        wallet: Address,
        code: &AuthCode,
        next: Commitment,
    ) -> Result<()> {
        check_wallet(&principal, &wallet)?;
        self.store.update(&principal, |slot| {
            let record = slot.as_mut().ok_or(GuardError::CodeNotSet)?;
            if record.recovery_wallet.is_some() {
                return Err(GuardError::RecoveryWalletAlreadySet);
            }
            validate_and_rotate(record, code, next)?;
            record.recovery_wallet = Some(wallet);
            Ok(())
        })?;
        debug!(principal = %principal, wallet = %wallet, "recovery wallet bound");
        Ok(())
    }

    /// Declare the principal compromised and switch payout routing to the
    /// recovery wallet. The compromised marker is permanent.
    pub fn activate_recovery(
        &self,
        principal: Address,
        code: &AuthCode,
        next: Commitment,
    ) -> Result<()> {
        self.store.update(&principal, |slot| {
            let record = slot.as_mut().ok_or(GuardError::CodeNotSet)?;
            if record.recovery_wallet.is_none() {
                return Err(GuardError::RecoveryWalletNotSet);
            }
            if record.recovery_active {
                return Err(GuardError::RecoveryModeAlreadyActive);
            }
            validate_and_rotate(record, code, next)?;
            record.recovery_active = true;
            record.compromised = true;
            Ok(())
        })?;
        info!(principal = %principal, "recovery mode activated");
        Ok(())
    }

    /// Turn payout redirection back off. The compromised marker stays set.
    pub fn deactivate_recovery(
        &self,
        principal: Address,
        code: &AuthCode,
        next: Commitment,
    ) -> Result<()> {
        self.store.update(&principal, |slot| {
            let record = slot.as_mut().ok_or(GuardError::CodeNotSet)?;
            if !record.recovery_active {
                return Err(GuardError::NotInRecoveryMode);
            }
            validate_and_rotate(record, code, next)?;
            record.recovery_active = false;
            Ok(())
        })?;
        info!(principal = %principal, "recovery mode deactivated");
        Ok(())
    }

    /// Move the recovery destination to a new wallet. Requires a wallet to
    /// have been bound previously via [`Self::set_recovery_wallet`].
    pub fn change_recovery_wallet(
        &self,
        principal: Address,
        wallet: Address,
        code: &AuthCode,
        next: Commitment,
    ) -> Result<()> {
        check_wallet(&principal, &wallet)?;
        self.store.update(&principal, |slot| {
            let record = slot.as_mut().ok_or(GuardError::CodeNotSet)?;
            if record.recovery_wallet.is_none() {
                return Err(GuardError::RecoveryWalletNotSet);
            }
            validate_and_rotate(record, code, next)?;
            record.recovery_wallet = Some(wallet);
            Ok(())
        })?;
        debug!(principal = %principal, wallet = %wallet, "recovery wallet changed");
        Ok(())
    }

    /// Set the permanent compromised marker without activating redirection.
    /// Distinct from activation: an audit signal, not a routing change.
    pub fn mark_compromised(
        &self,
        principal: Address,
        code: &AuthCode,
        next: Commitment,
    ) -> Result<()> {
        self.store.update(&principal, |slot| {
            let record = slot.as_mut().ok_or(GuardError::CodeNotSet)?;
            validate_and_rotate(record, code, next)?;
            record.compromised = true;
            Ok(())
        })?;
        info!(principal = %principal, "principal marked compromised");
        Ok(())
    }

    /// One-time correction of a mis-set initial commitment, without
    /// presenting the old code.
    ///
    /// Only available within the configured grace window after
    /// initialization, and only once ever. The window is anchored at the
    /// original `code_set_at` and is not re-anchored by the correction.
    pub fn change_code(&self, principal: Address, next: Commitment) -> Result<()> {
        let now = self.clock.now();
        let window = self.config.grace_window_ms;
        self.store.update(&principal, |slot| {
            let record = slot.as_mut().ok_or(GuardError::CodeNotSet)?;
            let current = record.commitment.ok_or(GuardError::CodeNotSet)?;
            if record.code_corrected {
                return Err(GuardError::CodeAlreadyChanged);
            }
            let set_at = record
                .code_set_at
                .ok_or_else(|| GuardError::storage("record is missing code_set_at"))?;
            if now.millis_since(set_at) > window {
                return Err(GuardError::GracePeriodExpired);
            }
            if next.is_zero() || next == current {
                return Err(GuardError::InvalidCode);
            }
            record.commitment = Some(next);
            record.code_corrected = true;
            Ok(())
        })?;
        debug!(principal = %principal, "initial code corrected within grace window");
        Ok(())
    }

    /// Condensed guard state for a principal. Unregistered principals
    /// report the all-false status.
    pub fn status(&self, principal: &Address) -> Result<GuardStatus> {
        Ok(self
            .store
            .load(principal)?
            .map(|record| record.status())
            .unwrap_or_default())
    }

    /// The principal's bound recovery wallet, if any.
    pub fn wallet_of(&self, principal: &Address) -> Result<Option<Address>> {
        Ok(self
            .store
            .load(principal)?
            .and_then(|record| record.recovery_wallet))
    }
}

/// Structural validation of a supplied recovery wallet.
fn check_wallet(principal: &Address, wallet: &Address) -> Result<()> {
    if wallet.is_zero() {
        return Err(GuardError::invalid_wallet("zero address"));
    }
    if wallet == principal {
        return Err(GuardError::invalid_wallet(
            "wallet must differ from the principal",
        ));
    }
    Ok(())
}

/// Validate the presented code against the stored commitment and install
/// the replacement. The caller applies its primary effect in the same
/// store transaction.
fn validate_and_rotate(
    record: &mut PrincipalRecord,
    code: &AuthCode,
    next: Commitment,
) -> Result<()> {
    let current = record.commitment.ok_or(GuardError::CodeNotSet)?;
    let canonical = code.canonical()?;
    let presented = Commitment::for_canonical(&canonical, record.salt.as_ref());
    if !presented.ct_eq(&current) {
        return Err(GuardError::InvalidCode);
    }
    if next.is_zero() || next == current {
        return Err(GuardError::InvalidCode);
    }
    record.commitment = Some(next);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryGuardStore;
    use assert_matches::assert_matches;

    const CODE_A: &str = "ABCD-EFGH-IJKL-MNOP-QRST-UVWX-YZ12";
    const CODE_B: &str = "A1B2-C3D4-E5F6-G7H8-I9J0-K1L2-M3N4";

    fn principal() -> Address {
        Address::from_bytes([1; 20])
    }

    fn wallet() -> Address {
        Address::from_bytes([2; 20])
    }

    fn commitment(code: &str, salt: Option<&Salt>) -> Commitment {
        Commitment::for_code(&AuthCode::new(code), salt).unwrap()
    }

    fn service() -> GuardService<MemoryGuardStore> {
        GuardService::new(MemoryGuardStore::new())
    }

    #[test]
    fn initialize_is_one_shot() {
        let guard = service();
        guard
            .initialize_code(principal(), commitment(CODE_A, None), None)
            .unwrap();
        assert_matches!(
            guard.initialize_code(principal(), commitment(CODE_B, None), None),
            Err(GuardError::CodeAlreadySet)
        );
    }

    #[test]
    fn initialize_rejects_zero_commitment() {
        let guard = service();
        assert_matches!(
            guard.initialize_code(principal(), Commitment::from_bytes([0; 32]), None),
            Err(GuardError::InvalidCode)
        );
    }

    #[test]
    fn operations_require_initialization() {
        let guard = service();
        assert_matches!(
            guard.set_recovery_wallet(
                principal(),
                wallet(),
                &AuthCode::new(CODE_A),
                commitment(CODE_B, None),
            ),
            Err(GuardError::CodeNotSet)
        );
    }

    #[test]
    fn wallet_binding_happy_path_rotates() {
        let guard = service();
        guard
            .initialize_code(principal(), commitment(CODE_A, None), None)
            .unwrap();
        guard
            .set_recovery_wallet(
                principal(),
                wallet(),
                &AuthCode::new(CODE_A),
                commitment(CODE_B, None),
            )
            .unwrap();
        let status = guard.status(&principal()).unwrap();
        assert!(status.wallet_bound);

        // Binding is one-time.
        assert_matches!(
            guard.set_recovery_wallet(
                principal(),
                Address::from_bytes([3; 20]),
                &AuthCode::new(CODE_B),
                commitment(CODE_A, None),
            ),
            Err(GuardError::RecoveryWalletAlreadySet)
        );
    }

    #[test]
    fn rejects_zero_and_self_referential_wallets() {
        let guard = service();
        guard
            .initialize_code(principal(), commitment(CODE_A, None), None)
            .unwrap();
        assert_matches!(
            guard.set_recovery_wallet(
                principal(),
                Address::ZERO,
                &AuthCode::new(CODE_A),
                commitment(CODE_B, None),
            ),
            Err(GuardError::InvalidRecoveryWallet { .. })
        );
        assert_matches!(
            guard.set_recovery_wallet(
                principal(),
                principal(),
                &AuthCode::new(CODE_A),
                commitment(CODE_B, None),
            ),
            Err(GuardError::InvalidRecoveryWallet { .. })
        );
    }

    #[test]
    fn wrong_code_is_rejected_without_consuming() {
        let guard = service();
        guard
            .initialize_code(principal(), commitment(CODE_A, None), None)
            .unwrap();
        assert_matches!(
            guard.set_recovery_wallet(
                principal(),
                wallet(),
                &AuthCode::new(CODE_B),
                commitment(CODE_B, None),
            ),
            Err(GuardError::InvalidCode)
        );
        // The original code still works: nothing was consumed on failure.
        guard
            .set_recovery_wallet(
                principal(),
                wallet(),
                &AuthCode::new(CODE_A),
                commitment(CODE_B, None),
            )
            .unwrap();
    }

    #[test]
    fn malformed_code_fails_format_check() {
        let guard = service();
        guard
            .initialize_code(principal(), commitment(CODE_A, None), None)
            .unwrap();
        assert_matches!(
            guard.set_recovery_wallet(
                principal(),
                wallet(),
                &AuthCode::new("too-short"),
                commitment(CODE_B, None),
            ),
            Err(GuardError::InvalidCodeFormat)
        );
    }

    #[test]
    fn replacement_commitment_must_actually_rotate() {
        let guard = service();
        let current = commitment(CODE_A, None);
        guard.initialize_code(principal(), current, None).unwrap();
        assert_matches!(
            guard.set_recovery_wallet(principal(), wallet(), &AuthCode::new(CODE_A), current),
            Err(GuardError::InvalidCode)
        );
        assert_matches!(
            guard.set_recovery_wallet(
                principal(),
                wallet(),
                &AuthCode::new(CODE_A),
                Commitment::from_bytes([0; 32]),
            ),
            Err(GuardError::InvalidCode)
        );
    }

    #[test]
    fn activation_requires_wallet_then_toggles() {
        let guard = service();
        guard
            .initialize_code(principal(), commitment(CODE_A, None), None)
            .unwrap();
        assert_matches!(
            guard.activate_recovery(principal(), &AuthCode::new(CODE_A), commitment(CODE_B, None)),
            Err(GuardError::RecoveryWalletNotSet)
        );

        guard
            .set_recovery_wallet(
                principal(),
                wallet(),
                &AuthCode::new(CODE_A),
                commitment(CODE_B, None),
            )
            .unwrap();
        guard
            .activate_recovery(principal(), &AuthCode::new(CODE_B), commitment(CODE_A, None))
            .unwrap();

        let status = guard.status(&principal()).unwrap();
        assert!(status.recovery_active);
        assert!(status.compromised);

        assert_matches!(
            guard.activate_recovery(principal(), &AuthCode::new(CODE_A), commitment(CODE_B, None)),
            Err(GuardError::RecoveryModeAlreadyActive)
        );

        guard
            .deactivate_recovery(principal(), &AuthCode::new(CODE_A), commitment(CODE_B, None))
            .unwrap();
        let status = guard.status(&principal()).unwrap();
        assert!(!status.recovery_active);
        assert!(status.compromised, "compromised marker is permanent");

        assert_matches!(
            guard.deactivate_recovery(
                principal(),
                &AuthCode::new(CODE_B),
                commitment(CODE_A, None)
            ),
            Err(GuardError::NotInRecoveryMode)
        );
    }

    #[test]
    fn change_wallet_requires_prior_binding() {
        let guard = service();
        guard
            .initialize_code(principal(), commitment(CODE_A, None), None)
            .unwrap();
        assert_matches!(
            guard.change_recovery_wallet(
                principal(),
                wallet(),
                &AuthCode::new(CODE_A),
                commitment(CODE_B, None),
            ),
            Err(GuardError::RecoveryWalletNotSet)
        );
    }

    #[test]
    fn mark_compromised_does_not_activate() {
        let guard = service();
        guard
            .initialize_code(principal(), commitment(CODE_A, None), None)
            .unwrap();
        guard
            .mark_compromised(principal(), &AuthCode::new(CODE_A), commitment(CODE_B, None))
            .unwrap();
        let status = guard.status(&principal()).unwrap();
        assert!(status.compromised);
        assert!(!status.recovery_active);
    }

    #[test]
    fn salted_records_validate_against_the_salted_commitment() {
        let guard = service();
        let salt = Salt::from_bytes([9; 32]);
        guard
            .initialize_code(principal(), commitment(CODE_A, Some(&salt)), Some(salt))
            .unwrap();

        // The presented code is hashed with the stored salt.
        guard
            .set_recovery_wallet(
                principal(),
                wallet(),
                &AuthCode::new(CODE_A),
                commitment(CODE_B, Some(&salt)),
            )
            .unwrap();
        // Next rotation also verifies against the stored salt.
        guard
            .activate_recovery(
                principal(),
                &AuthCode::new(CODE_B),
                commitment(CODE_A, Some(&salt)),
            )
            .unwrap();
    }

    #[test]
    fn status_of_unknown_principal_is_all_false() {
        let guard = service();
        let status = guard.status(&principal()).unwrap();
        assert_eq!(status, GuardStatus::default());
    }
}
