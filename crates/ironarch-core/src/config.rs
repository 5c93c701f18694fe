//! Gate configuration.

use std::time::Duration;

use ironarch_crypto::Fingerprint;

/// Failures allowed inside one window before submissions are refused.
pub const MAX_ATTEMPTS: u32 = 5;

/// Length of the lockout window.
pub const LOCKOUT_DURATION: Duration = Duration::from_secs(15 * 60);

/// Reference fingerprint shipped with the site, as hex.
///
/// Rotate by fingerprinting a new passphrase offline (`ironarch fingerprint`)
/// and redeploying.
pub const DEFAULT_REFERENCE_HEX: &str =
    "3bf8bca03469398e13b1af4ad847d2fff3f323fa7cdedc26aede7362babdcf1e";

const DEFAULT_REFERENCE: Fingerprint = Fingerprint::from_bytes([
    0x3b, 0xf8, 0xbc, 0xa0, 0x34, 0x69, 0x39, 0x8e, 0x13, 0xb1, 0xaf, 0x4a, 0xd8, 0x47, 0xd2, 0xff,
    0xf3, 0xf3, 0x23, 0xfa, 0x7c, 0xde, 0xdc, 0x26, 0xae, 0xde, 0x73, 0x62, 0xba, 0xbd, 0xcf, 0x1e,
]);

/// Owner gate configuration.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Failures tolerated per window.
    pub max_attempts: u32,
    /// Window length, measured from the first failure.
    pub lockout_duration: Duration,
    /// Fingerprint a submitted passphrase must match.
    pub reference: Fingerprint,
}

impl GateConfig {
    /// Default limits with a different reference fingerprint.
    pub fn with_reference(reference: Fingerprint) -> Self {
        Self { reference, ..Self::default() }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            lockout_duration: LOCKOUT_DURATION,
            reference: DEFAULT_REFERENCE,
        }
    }
}
