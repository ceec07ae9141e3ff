//! Settlement helpers for the concrete fund flows.
//!
//! A settlement resolves the payout destination first and only then
//! touches the ledger, so a failed resolution aborts the operation with
//! no ledger mutation.

use crate::router::{CustodyError, PayoutRouter};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use ward_core::Address;
use ward_guard::RecoveryQuery;

/// Which fund flow is being settled. The redirect rule is identical for
/// all of them; the distinction exists for audit logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundFlow {
    /// ERC20-style token transfer hook.
    TokenTransfer,
    /// Staking reward payout.
    StakingReward,
    /// Vesting schedule release.
    VestingRelease,
}

impl fmt::Display for FundFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FundFlow::TokenTransfer => "token-transfer",
            FundFlow::StakingReward => "staking-reward",
            FundFlow::VestingRelease => "vesting-release",
        };
        f.write_str(name)
    }
}

/// Minimal ledger surface custody code needs: credit an account.
pub trait Ledger {
    /// Credit `amount` to `account`.
    fn credit(&mut self, account: Address, amount: u64) -> Result<(), CustodyError>;
}

/// Settle a payout addressed to `payee`, honoring recovery redirection.
///
/// Returns the account actually credited.
pub fn settle<Q: RecoveryQuery, L: Ledger>(
    flow: FundFlow,
    router: &PayoutRouter<Q>,
    ledger: &mut L,
    payee: Address,
    amount: u64,
) -> Result<Address, CustodyError> {
    let destination = router.resolve(payee)?;
    ledger.credit(destination, amount)?;
    if destination != payee {
        info!(
            flow = %flow,
            principal = %payee,
            wallet = %destination,
            amount,
            "payout redirected"
        );
    }
    Ok(destination)
}
