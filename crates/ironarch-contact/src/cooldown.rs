//! Resubmission cooldown.
//!
//! The last successful submission is stored in the session scope as decimal
//! epoch millis. Storage failures disable the cooldown rather than the form.

use std::time::Duration;

use ironarch_core::{Environment, Storage, Timestamp};

use crate::config::LAST_SUBMIT_KEY;

/// Tracks the last successful submission.
pub struct Cooldown<E: Environment, S: Storage> {
    env: E,
    storage: S,
    window: Duration,
}

impl<E: Environment, S: Storage> Cooldown<E, S> {
    /// Cooldown of `window` backed by `storage`.
    pub fn new(env: E, storage: S, window: Duration) -> Self {
        Self { env, storage, window }
    }

    /// Time of the last successful submission, if known.
    pub fn last_submit(&self) -> Option<Timestamp> {
        let raw = match self.storage.get(LAST_SUBMIT_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                tracing::debug!(%error, "cooldown unreadable, treating as clear");
                return None;
            },
        };
        raw.trim().parse::<u64>().ok().map(Timestamp::from_millis)
    }

    /// Time left before another submission is allowed.
    pub fn remaining(&self) -> Option<Duration> {
        let elapsed = self.env.now().saturating_since(self.last_submit()?);
        let remaining = self.window.saturating_sub(elapsed);
        (!remaining.is_zero()).then_some(remaining)
    }

    /// Start the cooldown now.
    pub fn record(&self) {
        let now = self.env.now();
        if let Err(error) = self.storage.set(LAST_SUBMIT_KEY, &now.as_millis().to_string()) {
            tracing::debug!(%error, "cooldown not persisted");
        }
    }

    /// The clock this cooldown reads.
    pub fn env(&self) -> &E {
        &self.env
    }
}
