//! CLI error types.

use ironarch_contact::ContactError;
use ironarch_core::{AuthError, StorageError};
use ironarch_crypto::FingerprintError;
use thiserror::Error;

/// Errors that end a command with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    /// Passphrase refused or rate limited.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Contact message not delivered.
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// `--reference-fingerprint` is not a SHA-256 hex digest.
    #[error("invalid reference fingerprint: {0}")]
    Fingerprint(#[from] FingerprintError),

    /// State directory could not be changed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading the passphrase or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
