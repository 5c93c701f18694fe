//! Environment abstraction for deterministic testing.
//!
//! The `Environment` trait decouples gate logic from the wall clock. Lockout
//! windows and the contact cooldown are measured against `env.now()`, so tests
//! can jump fifteen minutes ahead without sleeping.
//!
//! # Invariants
//!
//! - Timestamps are milliseconds since the Unix epoch, matching what is
//!   persisted in the session scope
//! - Elapsed time never underflows: a clock that steps backwards reads as zero
//!   elapsed

use std::{
    fmt,
    ops::Add,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

/// Wall-clock instant in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// Create a timestamp from epoch milliseconds.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Epoch milliseconds.
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Read the system clock. Times before the epoch clamp to [`Self::EPOCH`].
    pub fn now_utc() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        Self(millis)
    }

    /// Time elapsed from `earlier` to `self`, zero if `earlier` is later.
    pub const fn saturating_since(self, earlier: Self) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        let millis = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Abstract environment providing time.
///
/// Production code uses the system clock; the harness supplies a manual
/// clock shared between every component of a simulated page.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_since_never_underflows() {
        let early = Timestamp::from_millis(1_000);
        let late = Timestamp::from_millis(4_500);

        assert_eq!(late.saturating_since(early), Duration::from_millis(3_500));
        assert_eq!(early.saturating_since(late), Duration::ZERO);
    }

    #[test]
    fn add_duration() {
        let t = Timestamp::from_millis(10) + Duration::from_secs(1);
        assert_eq!(t.as_millis(), 1_010);
    }

    #[test]
    fn add_saturates() {
        let t = Timestamp::from_millis(u64::MAX - 1) + Duration::from_secs(5);
        assert_eq!(t.as_millis(), u64::MAX);
    }

    #[test]
    fn serializes_as_bare_millis() {
        let json = serde_json::to_string(&Timestamp::from_millis(1_700_000_000_000))
            .unwrap_or_default();
        assert_eq!(json, "1700000000000");
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(Timestamp::now_utc().as_millis() > 1_577_836_800_000);
    }
}
