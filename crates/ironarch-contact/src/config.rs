//! Contact relay configuration.

use std::time::Duration;

/// Relay endpoint the site posts to.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/mqedypry";

/// Minimum time between two successful submissions.
pub const CONTACT_COOLDOWN: Duration = Duration::from_secs(60);

/// Session-scope key holding the last successful submission, in epoch millis.
pub const LAST_SUBMIT_KEY: &str = "ia_contact_last_submit";

/// Contact client configuration.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Relay URL.
    pub endpoint: String,
    /// Minimum time between successful submissions.
    pub cooldown: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cooldown: CONTACT_COOLDOWN,
            timeout: Duration::from_secs(15),
        }
    }
}
