//! Commitments and salts.
//!
//! A commitment is the 32-byte hash of a canonical code, optionally mixed
//! with a per-principal salt. The guard stores commitments only, never
//! plaintext codes. Salts are public: they defend against precomputed
//! dictionaries shared across principals, not against an observer of a
//! single principal's history.

use crate::code::{AuthCode, CanonicalCode};
use crate::error::Result;
use crate::hash::{self, DIGEST_LEN};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Hash commitment to the current one-time code of a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; DIGEST_LEN]);

impl Commitment {
    /// Create from raw digest bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw byte view.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Whether this is the all-zeroes digest, the "no commitment" sentinel
    /// in storage layouts that cannot represent absence. Never accepted as
    /// a replacement commitment.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; DIGEST_LEN]
    }

    /// Compute the commitment for a presented code.
    ///
    /// Canonicalizes first, so the same underlying code in any case or
    /// grouping yields the same commitment. Fails on malformed codes.
    pub fn for_code(code: &AuthCode, salt: Option<&Salt>) -> Result<Self> {
        Ok(Self::for_canonical(&code.canonical()?, salt))
    }

    /// Compute the commitment for an already-canonical code.
    pub fn for_canonical(canonical: &CanonicalCode, salt: Option<&Salt>) -> Self {
        let digest = match salt {
            Some(salt) => hash::hash_parts(canonical.as_bytes(), salt.as_bytes()),
            None => hash::hash(canonical.as_bytes()),
        };
        Self(digest)
    }

    /// Constant-time equality against another commitment.
    ///
    /// Used on the validation path so a mismatch does not leak how many
    /// leading bytes matched.
    pub fn ct_eq(&self, other: &Commitment) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Per-principal public randomness mixed into the commitment preimage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salt([u8; DIGEST_LEN]);

impl Salt {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw byte view.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Generate a fresh random salt from the OS entropy source.
    pub fn generate() -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
