//! Contact submission errors.

use std::time::Duration;

use thiserror::Error;

use crate::form::FieldError;

/// Generic text when the relay rejects a submission without details.
pub const GENERIC_FAILURE: &str = "Submission failed. Please try again later.";

/// Why a contact submission was not delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A message was sent too recently.
    #[error("Please wait {} before sending another message.", describe_wait(.remaining))]
    RateLimited {
        /// Time until the cooldown ends.
        remaining: Duration,
    },

    /// One or more fields are invalid.
    #[error("{}", join(.0))]
    Invalid(Vec<FieldError>),

    /// The relay answered but refused the submission.
    #[error("{}", describe_rejection(.messages))]
    Rejected {
        /// Messages reported by the relay, if any.
        messages: Vec<String>,
    },

    /// The relay could not be reached.
    #[error("Network error. Check your connection and try again.")]
    Network {
        /// Transport error.
        reason: String,
    },
}

impl ContactError {
    /// Whether the visitor can fix this by changing the form or waiting.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Invalid(_))
    }
}

fn describe_wait(remaining: &Duration) -> String {
    let secs = remaining.as_millis().div_ceil(1000).max(1);
    if secs == 1 { "1 second".to_string() } else { format!("{secs} seconds") }
}

fn describe_rejection(messages: &[String]) -> String {
    if messages.is_empty() { GENERIC_FAILURE.to_string() } else { messages.join(", ") }
}

fn join(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.message).collect::<Vec<_>>().join(" ")
}
