//! Gate and storage error types.

use std::time::Duration;

use thiserror::Error;

/// Errors from submitting a passphrase to the owner gate.
///
/// Both variants are local and recoverable. Neither ever takes down the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Too many failures inside the current lockout window.
    #[error("Too many attempts. Try again in {}.", describe_wait(.remaining))]
    RateLimited {
        /// Time left until the window expires.
        remaining: Duration,
    },

    /// Passphrase did not match the reference fingerprint.
    #[error("Invalid key. Access denied.")]
    InvalidCredential,
}

impl AuthError {
    /// Returns true if the visitor may resubmit straight away.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::InvalidCredential => true,
            Self::RateLimited { .. } => false,
        }
    }
}

/// Round a wait up to whole minutes for display.
fn describe_wait(remaining: &Duration) -> String {
    let minutes = remaining.as_secs().div_ceil(60).max(1);
    if minutes == 1 { "1 minute".to_string() } else { format!("{minutes} minutes") }
}

/// Errors from a storage backend.
///
/// These never escape the gate: `SessionState` swallows them and degrades to
/// public mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend refuses all access (e.g. restrictive privacy settings).
    #[error("storage unavailable: {reason}")]
    Unavailable {
        /// Why the backend is unavailable.
        reason: String,
    },

    /// Underlying file operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("storage serialization error: {reason}")]
    Serialization {
        /// Description of the encoding failure.
        reason: String,
    },
}
