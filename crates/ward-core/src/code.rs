//! One-time authorization codes.
//!
//! A code is presented as free-form text (typically grouped with `-`
//! separators for readability) and normalized to a fixed-length canonical
//! form before hashing: separators stripped, letters uppercased. The
//! canonical form is what commitments are computed over, so presentation
//! differences in case or grouping never change the commitment.
//!
//! Plaintext codes are secret until first use; both wrapper types zeroize
//! their contents on drop.

use crate::error::{GuardError, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a canonical code: 28 characters, each in `[A-Z0-9]`.
pub const CODE_LEN: usize = 28;

/// Separator characters stripped during canonicalization.
const SEPARATOR: char = '-';

/// A presented one-time authorization code, as typed or pasted by the
/// principal. May contain `-` separators and mixed case.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AuthCode(String);

impl AuthCode {
    /// Wrap a presented code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Validate the format and produce the canonical form.
    ///
    /// Fails with [`GuardError::InvalidCodeFormat`] before any hashing can
    /// happen if the stripped code is not exactly [`CODE_LEN`] alphanumeric
    /// ASCII characters.
    pub fn canonical(&self) -> Result<CanonicalCode> {
        let mut out = [0u8; CODE_LEN];
        let mut len = 0usize;
        for ch in self.0.chars() {
            if ch == SEPARATOR {
                continue;
            }
            if !ch.is_ascii_alphanumeric() {
                return Err(GuardError::InvalidCodeFormat);
            }
            if len == CODE_LEN {
                return Err(GuardError::InvalidCodeFormat);
            }
            out[len] = ch.to_ascii_uppercase() as u8;
            len += 1;
        }
        if len != CODE_LEN {
            return Err(GuardError::InvalidCodeFormat);
        }
        Ok(CanonicalCode(out))
    }
}

impl std::fmt::Debug for AuthCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the plaintext.
        f.write_str("AuthCode(..)")
    }
}

/// Canonical form of a code: separator-free, uppercase, fixed length.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CanonicalCode([u8; CODE_LEN]);

impl CanonicalCode {
    /// Byte view used as the commitment preimage.
    pub fn as_bytes(&self) -> &[u8; CODE_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for CanonicalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CanonicalCode(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn canonicalizes_case_and_separators() {
        let grouped = AuthCode::new("abcd-efgh-ijkl-mnop-qrst-uvwx-yz12");
        let flat = AuthCode::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ12");
        assert_eq!(grouped.canonical().unwrap(), flat.canonical().unwrap());
        assert_eq!(
            flat.canonical().unwrap().as_bytes(),
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZ12"
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            AuthCode::new("ABC").canonical(),
            Err(GuardError::InvalidCodeFormat)
        ));
        assert!(matches!(
            AuthCode::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ123").canonical(),
            Err(GuardError::InvalidCodeFormat)
        ));
    }

    #[test]
    fn rejects_non_alphanumeric() {
        assert!(matches!(
            AuthCode::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ1_").canonical(),
            Err(GuardError::InvalidCodeFormat)
        ));
        // Separators alone do not make a short code valid.
        assert!(matches!(
            AuthCode::new("----").canonical(),
            Err(GuardError::InvalidCodeFormat)
        ));
    }

    fn arb_raw_code() -> impl Strategy<Value = String> {
        // 28 alphanumeric characters with random case and random grouping.
        proptest::collection::vec(
            proptest::char::ranges(vec!['a'..='z', 'A'..='Z', '0'..='9'].into()),
            CODE_LEN,
        )
        .prop_flat_map(|chars| {
            proptest::collection::vec(any::<bool>(), CODE_LEN).prop_map(move |breaks| {
                let mut s = String::new();
                for (ch, brk) in chars.iter().zip(breaks) {
                    if brk && !s.is_empty() {
                        s.push('-');
                    }
                    s.push(*ch);
                }
                s
            })
        })
    }

    proptest! {
        /// Canonicalization is idempotent: re-canonicalizing the canonical
        /// form yields the same bytes.
        #[test]
        fn canonicalization_idempotent(raw in arb_raw_code()) {
            let once = AuthCode::new(raw).canonical().unwrap();
            let as_str = String::from_utf8(once.as_bytes().to_vec()).unwrap();
            let twice = AuthCode::new(as_str).canonical().unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Case and grouping never change the canonical form.
        #[test]
        fn case_and_grouping_insensitive(raw in arb_raw_code()) {
            let canonical = AuthCode::new(raw.clone()).canonical().unwrap();
            let shouted = AuthCode::new(raw.to_ascii_uppercase()).canonical().unwrap();
            let stripped: String = raw.chars().filter(|c| *c != '-').collect();
            let flat = AuthCode::new(stripped.to_ascii_lowercase()).canonical().unwrap();
            prop_assert_eq!(canonical.clone(), shouted);
            prop_assert_eq!(canonical, flat);
        }
    }
}
