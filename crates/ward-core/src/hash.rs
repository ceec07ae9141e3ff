//! Centralized hash algorithm for commitments.
//!
//! Hashing is pure and deterministic, so it lives behind plain functions
//! rather than a service abstraction. Keeping the algorithm in one module
//! means there is a single place to change it; all commitment construction
//! and validation routes through [`hash`].
//!
//! Current algorithm: **SHA-256** (256-bit / 32-byte output).

use sha2::{Digest, Sha256};

/// Byte length of a digest.
pub const DIGEST_LEN: usize = 32;

/// Hash arbitrary bytes to a 32-byte digest.
pub fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Hash two byte slices as one message (used for salted preimages).
pub fn hash_parts(first: &[u8], second: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(first);
    hasher.update(second);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}
