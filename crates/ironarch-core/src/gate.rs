//! Owner gate state machine.
//!
//! The `AccessGate` decides whether the viewer sees private content. It is a
//! content-visibility toggle and nothing more: the reference fingerprint ships
//! with the site and the persisted flag can be set by hand.
//!
//! # States
//!
//! ```text
//!            submit(match), not locked out
//!   Public ─────────────────────────────────▶ Owner
//!     ▲                                         │
//!     └──────────────── logout() ───────────────┘
//! ```
//!
//! `LockedOut` is derived from the attempt record and never stored:
//! `count >= max_attempts` and less than `lockout_duration` has passed since
//! the first failure of the window. Once the window has passed the record is
//! dropped entirely.

use std::time::Duration;

use crate::{
    config::GateConfig,
    env::{Environment, Timestamp},
    error::AuthError,
    event::{GateAction, GateEvent},
    session::{AttemptRecord, Mode, SessionState},
    storage::Storage,
    visibility::ContentVisibility,
};

/// Owner gate.
///
/// Pure state machine - returns actions, caller handles UI.
///
/// # Type Parameters
///
/// - `E`: Environment implementation for time
/// - `S`: Storage backend for both scopes
pub struct AccessGate<E: Environment, S: Storage> {
    /// Limits and reference fingerprint.
    config: GateConfig,

    /// Persisted flag and attempt record.
    session: SessionState<S>,

    /// Runtime mode.
    mode: Mode,

    /// Environment for time.
    env: E,
}

impl<E: Environment, S: Storage> AccessGate<E, S> {
    /// Create a gate in public mode. Call [`Self::initialize`] to restore a
    /// persisted owner flag.
    pub fn new(env: E, config: GateConfig, session: SessionState<S>) -> Self {
        Self { config, session, mode: Mode::Public, env }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether owner mode is active. Side-effect free.
    pub fn is_owner(&self) -> bool {
        self.mode.is_owner()
    }

    /// Visibility capability for renderers.
    pub fn visibility(&self) -> ContentVisibility {
        ContentVisibility::for_mode(self.mode)
    }

    /// Gate configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Session state backing this gate.
    pub fn session(&self) -> &SessionState<S> {
        &self.session
    }

    /// Failed attempts in the current window, if any.
    pub fn attempts(&self) -> Option<AttemptRecord> {
        let now = self.env.now();
        self.session
            .attempts()
            .filter(|record| !record.is_expired(now, self.config.lockout_duration))
    }

    /// Time until submissions are accepted again, if locked out.
    pub fn lockout_remaining(&self) -> Option<Duration> {
        let now = self.env.now();
        self.session.attempts().and_then(|record| {
            record.lockout_remaining(now, self.config.max_attempts, self.config.lockout_duration)
        })
    }

    /// Process an event and return resulting actions.
    ///
    /// # Errors
    ///
    /// Only [`GateEvent::Submit`] can fail; see [`Self::submit`].
    pub fn handle(&mut self, event: GateEvent) -> Result<Vec<GateAction>, AuthError> {
        match event {
            GateEvent::Initialize => Ok(self.initialize()),
            GateEvent::Submit { passphrase } => self.submit(&passphrase),
            GateEvent::Logout => Ok(self.logout()),
            GateEvent::Toggle => Ok(self.toggle()),
        }
    }

    /// Restore owner mode from the persisted flag. Idempotent.
    pub fn initialize(&mut self) -> Vec<GateAction> {
        if self.session.mode() != Mode::Owner {
            return vec![];
        }

        self.mode = Mode::Owner;
        tracing::debug!("restored owner mode from persisted flag");
        vec![GateAction::mode_changed(Mode::Owner)]
    }

    /// Submit a passphrase.
    ///
    /// Blank input (after trimming) is ignored: no attempt is recorded and no
    /// actions are returned.
    ///
    /// # Errors
    ///
    /// - [`AuthError::RateLimited`] while locked out. The passphrase is not
    ///   evaluated and no attempt is recorded.
    /// - [`AuthError::InvalidCredential`] when the fingerprint does not match.
    ///   The failure is counted.
    pub fn submit(&mut self, passphrase: &str) -> Result<Vec<GateAction>, AuthError> {
        let passphrase = passphrase.trim();
        if passphrase.is_empty() {
            return Ok(vec![]);
        }

        let now = self.env.now();
        let record = self.current_window(now);

        if let Some(remaining) = record.and_then(|r| {
            r.lockout_remaining(now, self.config.max_attempts, self.config.lockout_duration)
        }) {
            tracing::info!(remaining_secs = remaining.as_secs(), "locked out, submission refused");
            return Err(AuthError::RateLimited { remaining });
        }

        if !self.config.reference.matches(passphrase) {
            let mut record = record.unwrap_or_else(|| AttemptRecord::fresh(now));
            record.count = record.count.saturating_add(1);
            self.session.store_attempts(record);

            tracing::info!(
                attempts = record.count,
                max_attempts = self.config.max_attempts,
                "passphrase rejected"
            );
            return Err(AuthError::InvalidCredential);
        }

        self.session.clear_attempts();

        let mut actions = Vec::with_capacity(2);
        if self.session.set_mode(Mode::Owner) {
            if self.mode != Mode::Owner {
                self.mode = Mode::Owner;
                actions.push(GateAction::mode_changed(Mode::Owner));
            }
            tracing::info!("owner mode enabled");
        } else {
            tracing::warn!("passphrase accepted but owner mode cannot be remembered");
        }
        actions.push(GateAction::Dismiss);

        Ok(actions)
    }

    /// Leave owner mode. Always succeeds; the attempt record is untouched.
    pub fn logout(&mut self) -> Vec<GateAction> {
        self.session.clear();
        self.mode = Mode::Public;
        tracing::info!("owner mode disabled");
        vec![GateAction::mode_changed(Mode::Public)]
    }

    /// Toggle button: log out when owner, otherwise prompt for a passphrase.
    pub fn toggle(&mut self) -> Vec<GateAction> {
        if self.is_owner() { self.logout() } else { vec![GateAction::PromptPassphrase] }
    }

    /// Attempt record for the window containing `now`, dropping an expired one.
    fn current_window(&mut self, now: Timestamp) -> Option<AttemptRecord> {
        let record = self.session.attempts()?;
        if record.is_expired(now, self.config.lockout_duration) {
            tracing::debug!(count = record.count, "lockout window elapsed, resetting");
            self.session.clear_attempts();
            return None;
        }
        Some(record)
    }
}
