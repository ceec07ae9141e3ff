//! Deterministic codes, commitments, and addresses.

use crate::clock::ManualClock;
use ward_core::{Address, AuthCode, Commitment, Salt};
use ward_guard::{GuardService, MemoryGuardStore};

/// A well-formed demonstration code, grouped for readability.
pub const CODE_ONE: &str = "ABCD-EFGH-IJKL-MNOP-QRST-UVWX-YZ12";

/// A second well-formed code, distinct from [`CODE_ONE`].
pub const CODE_TWO: &str = "A1B2-C3D4-E5F6-G7H8-I9J0-K1L2-M3N4";

/// A third well-formed code for multi-rotation scenarios.
pub const CODE_THREE: &str = "ZZZZ-YYYY-XXXX-WWWW-VVVV-UUUU-9876";

/// Wrap a code string.
pub fn code(raw: &str) -> AuthCode {
    AuthCode::new(raw)
}

/// Commitment for a code string, panicking on malformed fixtures.
pub fn commitment(raw: &str, salt: Option<&Salt>) -> Commitment {
    Commitment::for_code(&AuthCode::new(raw), salt).expect("fixture code must be well-formed")
}

/// Deterministic address from a fill byte.
pub fn address(byte: u8) -> Address {
    Address::from_bytes([byte; 20])
}

/// In-memory guard service on a manual clock starting at t=1000ms.
///
/// Returns the service and a clock handle sharing the same time source.
pub fn manual_guard() -> (GuardService<MemoryGuardStore, ManualClock>, ManualClock) {
    let clock = ManualClock::starting_at(1_000);
    let guard = GuardService::with_clock(MemoryGuardStore::new(), clock.clone());
    (guard, clock)
}
