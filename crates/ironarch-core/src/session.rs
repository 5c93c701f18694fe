//! Session state: the single owner of the persisted mode flag and the
//! failed-attempt record.
//!
//! Nothing else in the workspace reads `ia_owner_mode` or `ia_auth_attempts`
//! directly. Storage failures are swallowed here and logged; callers only ever
//! see a [`Mode`] or an [`AttemptRecord`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{env::Timestamp, storage::Storage};

/// Persistent-scope key of the owner flag.
pub const OWNER_MODE_KEY: &str = "ia_owner_mode";

/// Value stored under [`OWNER_MODE_KEY`] while in owner mode.
pub const OWNER_MODE_MARKER: &str = "1";

/// Session-scope key of the failed-attempt record.
pub const AUTH_ATTEMPTS_KEY: &str = "ia_auth_attempts";

/// Visibility level of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Casual visitor. Private content is hidden.
    #[default]
    Public,
    /// Site owner. Private content is shown.
    Owner,
}

impl Mode {
    /// Whether this is owner mode.
    pub const fn is_owner(self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Owner => "Owner",
        }
    }
}

/// Failed attempts inside one lockout window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Failures counted in this window.
    pub count: u32,
    /// When the first failure of the window happened.
    pub since: Timestamp,
}

impl AttemptRecord {
    /// An empty window opening at `now`.
    pub const fn fresh(now: Timestamp) -> Self {
        Self { count: 0, since: now }
    }

    /// Whether `window` has elapsed since the first failure.
    pub fn is_expired(&self, now: Timestamp, window: Duration) -> bool {
        now.saturating_since(self.since) >= window
    }

    /// Time left before the lockout lifts, if this record is locked out.
    pub fn lockout_remaining(
        &self,
        now: Timestamp,
        max_attempts: u32,
        window: Duration,
    ) -> Option<Duration> {
        if self.count < max_attempts {
            return None;
        }

        let elapsed = now.saturating_since(self.since);
        window.checked_sub(elapsed).filter(|remaining| !remaining.is_zero())
    }
}

/// Owned view of both storage scopes.
///
/// `persistent` survives restarts and holds the owner flag; `session` holds
/// the attempt record. When the session scope is unavailable the record lives
/// in an in-memory shadow for the lifetime of this value.
#[derive(Debug)]
pub struct SessionState<S: Storage> {
    persistent: S,
    session: S,
    attempts_shadow: Option<AttemptRecord>,
}

impl<S: Storage> SessionState<S> {
    /// Wrap the two storage scopes.
    pub fn new(persistent: S, session: S) -> Self {
        Self { persistent, session, attempts_shadow: None }
    }

    /// Persisted mode. Any storage failure reads as [`Mode::Public`].
    pub fn mode(&self) -> Mode {
        match self.persistent.get(OWNER_MODE_KEY) {
            Ok(Some(value)) if value == OWNER_MODE_MARKER => Mode::Owner,
            Ok(_) => Mode::Public,
            Err(e) => {
                tracing::debug!(error = %e, "owner flag unreadable, treating as public");
                Mode::Public
            },
        }
    }

    /// Persist `mode`. Returns whether the write took effect.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        let result = match mode {
            Mode::Owner => self.persistent.set(OWNER_MODE_KEY, OWNER_MODE_MARKER),
            Mode::Public => self.persistent.remove(OWNER_MODE_KEY),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, mode = mode.label(), "cannot persist mode");
                false
            },
        }
    }

    /// Remove the owner flag. Returns whether the removal took effect.
    pub fn clear(&mut self) -> bool {
        self.set_mode(Mode::Public)
    }

    /// Current attempt record, `None` when no failures are on file.
    ///
    /// A malformed stored record reads as absent.
    pub fn attempts(&self) -> Option<AttemptRecord> {
        match self.session.get(AUTH_ATTEMPTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!(error = %e, "discarding malformed attempt record");
                    None
                },
            },
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(error = %e, "session scope unreadable, using shadow record");
                self.attempts_shadow
            },
        }
    }

    /// Store `record` as the current attempt record.
    pub fn store_attempts(&mut self, record: AttemptRecord) {
        self.attempts_shadow = Some(record);

        let encoded = match serde_json::to_string(&record) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(error = %e, "cannot encode attempt record");
                return;
            },
        };

        if let Err(e) = self.session.set(AUTH_ATTEMPTS_KEY, &encoded) {
            tracing::debug!(error = %e, "attempt record kept in memory only");
        }
    }

    /// Forget all failed attempts.
    pub fn clear_attempts(&mut self) {
        self.attempts_shadow = None;
        if let Err(e) = self.session.remove(AUTH_ATTEMPTS_KEY) {
            tracing::debug!(error = %e, "cannot clear stored attempt record");
        }
    }

    /// Persistent scope.
    pub fn persistent(&self) -> &S {
        &self.persistent
    }

    /// Session scope.
    pub fn session(&self) -> &S {
        &self.session
    }
}
