//! Operations for model-based testing.
//!
//! Operations represent everything a visitor (or time) can do to a tab. They
//! are generated randomly by proptest or the fuzzer and applied to both the
//! model and the real gate.

use std::time::Duration;

use arbitrary::Arbitrary;

/// Operations that can be applied to a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Visitor submits a passphrase.
    Submit {
        /// Whether the passphrase matches the reference.
        correct: bool,
        /// Submit only whitespace (takes precedence over `correct`).
        blank: bool,
    },

    /// Visitor leaves owner mode.
    Logout,

    /// Page is reloaded.
    Reload,

    /// Wall clock moves forward.
    AdvanceTime {
        /// Seconds to advance.
        secs: u16,
    },
}

impl Operation {
    /// Duration of an [`Operation::AdvanceTime`], zero otherwise.
    pub fn elapsed(&self) -> Duration {
        match self {
            Self::AdvanceTime { secs } => Duration::from_secs(u64::from(*secs)),
            _ => Duration::ZERO,
        }
    }
}

/// Result of applying an operation, as observed from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// Blank passphrase ignored.
    Ignored,
    /// Passphrase accepted.
    Accepted,
    /// Passphrase did not match.
    Rejected,
    /// Refused during a lockout.
    RateLimited,
    /// Non-submit operation completed.
    Done,
}
