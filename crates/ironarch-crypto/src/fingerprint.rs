//! SHA-256 passphrase fingerprints.
//!
//! A [`Fingerprint`] is the raw 32-byte digest of a passphrase. It renders as
//! lowercase hex, which is also the form operators paste into configuration
//! when rotating the reference value.

use std::{fmt, str::FromStr};

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Size of a fingerprint in bytes.
pub const FINGERPRINT_SIZE: usize = 32;

/// Errors from parsing a hex fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
    /// Input was not valid hex.
    #[error("invalid hex fingerprint: {reason}")]
    InvalidHex {
        /// Description of the decoding failure.
        reason: String,
    },

    /// Input decoded to the wrong number of bytes.
    #[error("fingerprint must be {FINGERPRINT_SIZE} bytes, got {actual}")]
    InvalidLength {
        /// Number of bytes decoded.
        actual: usize,
    },
}

/// One-way digest of a passphrase.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_SIZE]);

impl Fingerprint {
    /// Fingerprint the given passphrase exactly as provided.
    ///
    /// Callers are responsible for trimming; the digest covers every byte.
    pub fn of(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        let mut bytes = [0u8; FINGERPRINT_SIZE];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse a hex fingerprint. Surrounding whitespace and upper case are
    /// accepted.
    pub fn from_hex(input: &str) -> Result<Self, FingerprintError> {
        let decoded = hex::decode(input.trim())
            .map_err(|e| FingerprintError::InvalidHex { reason: e.to_string() })?;

        let bytes: [u8; FINGERPRINT_SIZE] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| FingerprintError::InvalidLength { actual: decoded.len() })?;

        Ok(Self(bytes))
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }

    /// Whether `passphrase` hashes to this fingerprint.
    pub fn matches(&self, passphrase: &str) -> bool {
        Self::of(passphrase) == *self
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn known_digest_of_abc() {
        assert_eq!(
            Fingerprint::of("abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn known_digest_of_empty_string() {
        assert_eq!(
            Fingerprint::of("").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn parse_accepts_upper_case_and_whitespace() {
        let parsed = Fingerprint::from_hex(
            "  BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD\n",
        )
        .unwrap();
        assert_eq!(parsed, Fingerprint::of("abc"));
    }

    #[test]
    fn parse_rejects_bad_hex() {
        let err = Fingerprint::from_hex("zz").unwrap_err();
        assert!(matches!(err, FingerprintError::InvalidHex { .. }));
    }

    #[test]
    fn parse_rejects_short_digest() {
        let err = Fingerprint::from_hex("abcd").unwrap_err();
        assert_eq!(err, FingerprintError::InvalidLength { actual: 2 });
    }

    #[test]
    fn digest_is_whitespace_sensitive() {
        assert_ne!(Fingerprint::of("secret"), Fingerprint::of(" secret"));
    }

    #[test]
    fn debug_shows_hex() {
        let debug = format!("{:?}", Fingerprint::of("abc"));
        assert!(debug.starts_with("Fingerprint(ba7816bf"));
    }

    proptest! {
        #[test]
        fn matches_agrees_with_equality(a in ".{0,32}", b in ".{0,32}") {
            let reference = Fingerprint::of(&a);
            prop_assert_eq!(reference.matches(&b), a == b);
        }

        #[test]
        fn display_parses_back(input in ".{0,64}") {
            let fingerprint = Fingerprint::of(&input);
            let parsed: Fingerprint = fingerprint.to_string().parse().unwrap();
            prop_assert_eq!(parsed, fingerprint);
        }
    }
}
