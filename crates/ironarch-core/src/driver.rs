//! Gate driver with listener subscription.
//!
//! Hosts that prefer callbacks over matching on actions register
//! [`GateListener`]s. The driver forwards every event to the gate and then
//! tells listeners what happened, so renderers re-render after each mode
//! change without knowing anything about passphrases.

use crate::{
    env::Environment,
    error::AuthError,
    event::{GateAction, GateEvent},
    gate::AccessGate,
    storage::Storage,
    visibility::ContentVisibility,
};

/// Callbacks invoked by [`GateDriver`]. All methods default to no-ops.
pub trait GateListener {
    /// A passphrase submission finished (including blank, ignored input).
    fn on_submit(&mut self, _result: &Result<Vec<GateAction>, AuthError>) {}

    /// A logout ran, either directly or through the toggle in owner mode.
    fn on_logout(&mut self) {}

    /// The mode changed; re-render with the new visibility.
    fn on_mode_changed(&mut self, _visibility: ContentVisibility) {}
}

/// Owns a gate and the listeners subscribed to it.
pub struct GateDriver<E: Environment, S: Storage> {
    gate: AccessGate<E, S>,
    listeners: Vec<Box<dyn GateListener>>,
}

impl<E: Environment, S: Storage> GateDriver<E, S> {
    /// Wrap a gate with no listeners.
    pub fn new(gate: AccessGate<E, S>) -> Self {
        Self { gate, listeners: Vec::new() }
    }

    /// Register a listener. Listeners are notified in registration order.
    pub fn subscribe(&mut self, listener: Box<dyn GateListener>) {
        self.listeners.push(listener);
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The wrapped gate.
    pub fn gate(&self) -> &AccessGate<E, S> {
        &self.gate
    }

    /// Feed an event to the gate and notify listeners.
    pub fn dispatch(&mut self, event: GateEvent) -> Result<Vec<GateAction>, AuthError> {
        let is_submit = matches!(event, GateEvent::Submit { .. });
        let is_logout = match event {
            GateEvent::Logout => true,
            GateEvent::Toggle => self.gate.is_owner(),
            GateEvent::Initialize | GateEvent::Submit { .. } => false,
        };

        let result = self.gate.handle(event);

        if is_submit {
            for listener in &mut self.listeners {
                listener.on_submit(&result);
            }
        }

        if is_logout {
            for listener in &mut self.listeners {
                listener.on_logout();
            }
        }

        if let Ok(actions) = &result {
            for action in actions {
                if let GateAction::ModeChanged { mode, .. } = action {
                    let visibility = ContentVisibility::for_mode(*mode);
                    for listener in &mut self.listeners {
                        listener.on_mode_changed(visibility);
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use ironarch_crypto::Fingerprint;

    use super::*;
    use crate::{
        config::GateConfig,
        env::Timestamp,
        session::{Mode, SessionState},
        storage::MemoryStorage,
    };

    #[derive(Clone)]
    struct FixedEnv;

    impl Environment for FixedEnv {
        fn now(&self) -> Timestamp {
            Timestamp::from_millis(1_000)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Seen {
        Submit(bool),
        Logout,
        ModeChanged(Mode),
    }

    struct Recorder(Arc<Mutex<Vec<Seen>>>);

    impl GateListener for Recorder {
        fn on_submit(&mut self, result: &Result<Vec<GateAction>, AuthError>) {
            self.0.lock().unwrap().push(Seen::Submit(result.is_ok()));
        }

        fn on_logout(&mut self) {
            self.0.lock().unwrap().push(Seen::Logout);
        }

        fn on_mode_changed(&mut self, visibility: ContentVisibility) {
            self.0.lock().unwrap().push(Seen::ModeChanged(visibility.mode()));
        }
    }

    fn driver() -> (GateDriver<FixedEnv, MemoryStorage>, Arc<Mutex<Vec<Seen>>>) {
        let gate = AccessGate::new(
            FixedEnv,
            GateConfig::with_reference(Fingerprint::of("open sesame")),
            SessionState::new(MemoryStorage::new(), MemoryStorage::new()),
        );
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut driver = GateDriver::new(gate);
        driver.subscribe(Box::new(Recorder(Arc::clone(&seen))));
        (driver, seen)
    }

    fn submit(passphrase: &str) -> GateEvent {
        GateEvent::Submit { passphrase: passphrase.to_string() }
    }

    #[test]
    fn successful_submit_notifies_submit_then_mode() {
        let (mut driver, seen) = driver();
        driver.dispatch(submit("open sesame")).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![Seen::Submit(true), Seen::ModeChanged(Mode::Owner)]);
    }

    #[test]
    fn failed_submit_notifies_only_submit() {
        let (mut driver, seen) = driver();
        assert!(driver.dispatch(submit("wrong")).is_err());

        assert_eq!(*seen.lock().unwrap(), vec![Seen::Submit(false)]);
    }

    #[test]
    fn toggle_out_of_owner_mode_is_a_logout() {
        let (mut driver, seen) = driver();
        driver.dispatch(submit("open sesame")).unwrap();
        seen.lock().unwrap().clear();

        driver.dispatch(GateEvent::Toggle).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![Seen::Logout, Seen::ModeChanged(Mode::Public)]);
    }

    #[test]
    fn logout_while_public_notifies_and_rerenders() {
        let (mut driver, seen) = driver();
        driver.dispatch(GateEvent::Logout).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![Seen::Logout, Seen::ModeChanged(Mode::Public)]);
    }

    #[test]
    fn toggle_while_public_is_not_a_logout() {
        let (mut driver, seen) = driver();
        driver.dispatch(GateEvent::Toggle).unwrap();

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn listeners_counted() {
        let (driver, _) = driver();
        assert_eq!(driver.listener_count(), 1);
    }
}
