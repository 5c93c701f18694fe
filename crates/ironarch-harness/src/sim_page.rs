//! Simulated browser tab.
//!
//! A `SimPage` owns a real [`AccessGate`] over in-memory scopes. Reloading
//! builds a fresh gate over the same scopes, the way a page load rebuilds the
//! gate from browser storage; closing the session drops the session scope.

use ironarch_core::{
    AccessGate, AuthError, Fingerprint, GateAction, GateConfig, MemoryStorage, Mode,
    SessionState,
};

use crate::sim_env::SimEnv;

/// Passphrase accepted by pages built with [`SimPage::new`].
pub const SIM_PASSPHRASE: &str = "correct horse battery staple";

/// One tab of the site.
pub struct SimPage {
    env: SimEnv,
    config: GateConfig,
    persistent: MemoryStorage,
    session: MemoryStorage,
    gate: AccessGate<SimEnv, MemoryStorage>,
}

impl SimPage {
    /// Fresh tab accepting [`SIM_PASSPHRASE`], already initialized.
    pub fn new(env: SimEnv) -> Self {
        Self::with_config(env, GateConfig::with_reference(Fingerprint::of(SIM_PASSPHRASE)))
    }

    /// Fresh tab with a custom configuration, already initialized.
    pub fn with_config(env: SimEnv, config: GateConfig) -> Self {
        Self::over(env, config, MemoryStorage::new(), MemoryStorage::new())
    }

    fn over(
        env: SimEnv,
        config: GateConfig,
        persistent: MemoryStorage,
        session: MemoryStorage,
    ) -> Self {
        let state = SessionState::new(persistent.clone(), session.clone());
        let mut gate = AccessGate::new(env.clone(), config.clone(), state);
        gate.initialize();
        Self { env, config, persistent, session, gate }
    }

    /// Reload the tab: same scopes, fresh gate.
    pub fn reload(&mut self) -> Vec<GateAction> {
        let state = SessionState::new(self.persistent.clone(), self.session.clone());
        self.gate = AccessGate::new(self.env.clone(), self.config.clone(), state);
        self.gate.initialize()
    }

    /// Open a new tab in a new browsing session: persistent scope kept,
    /// session scope empty.
    pub fn new_session(&self) -> Self {
        Self::over(
            self.env.clone(),
            self.config.clone(),
            self.persistent.clone(),
            MemoryStorage::new(),
        )
    }

    /// Submit a passphrase.
    pub fn submit(&mut self, passphrase: &str) -> Result<Vec<GateAction>, AuthError> {
        self.gate.submit(passphrase)
    }

    /// Log out.
    pub fn logout(&mut self) -> Vec<GateAction> {
        self.gate.logout()
    }

    /// Press the mode toggle.
    pub fn toggle(&mut self) -> Vec<GateAction> {
        self.gate.toggle()
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.gate.mode()
    }

    /// The gate.
    pub fn gate(&self) -> &AccessGate<SimEnv, MemoryStorage> {
        &self.gate
    }

    /// Persistent scope.
    pub fn persistent(&self) -> &MemoryStorage {
        &self.persistent
    }

    /// Session scope.
    pub fn session(&self) -> &MemoryStorage {
        &self.session
    }

    /// The shared clock.
    pub fn env(&self) -> &SimEnv {
        &self.env
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reload_restores_owner_mode() {
        let mut page = SimPage::new(SimEnv::new());
        page.submit(SIM_PASSPHRASE).unwrap();

        let actions = page.reload();

        assert_eq!(actions, vec![GateAction::mode_changed(Mode::Owner)]);
        assert_eq!(page.mode(), Mode::Owner);
    }

    #[test]
    fn new_session_forgets_attempts_but_not_mode() {
        let mut page = SimPage::new(SimEnv::new());
        assert!(page.submit("nope").is_err());
        page.submit(SIM_PASSPHRASE).unwrap();
        assert!(page.submit("nope").is_err());

        let fresh = page.new_session();

        assert_eq!(fresh.mode(), Mode::Owner);
        assert!(fresh.gate().attempts().is_none());
    }
}
