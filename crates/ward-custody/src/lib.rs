//! Ward Custody - Fund-Flow Integration
//!
//! This crate implements the consumer side of the guard contract: before
//! sending funds to a principal, custody code resolves the actual payout
//! destination through the guard's read API. While recovery mode is active
//! the payout goes to the principal's recovery wallet; if recovery is
//! active but no wallet is bound, the whole payout fails - a configuration
//! error, never a silent no-op.
//!
//! Token transfer hooks, staking reward payouts, and vesting releases all
//! reduce to the same redirect rule, so they share one settlement path.
//!
//! Custody code depends on the [`ward_guard::RecoveryQuery`] trait only,
//! never on a concrete guard, so it tests against a stub.

#![forbid(unsafe_code)]

/// Settlement helpers for the concrete fund flows
pub mod flows;

/// Payout destination resolution
pub mod router;

pub use flows::{settle, FundFlow, Ledger};
pub use router::{CustodyError, PayoutRouter};
