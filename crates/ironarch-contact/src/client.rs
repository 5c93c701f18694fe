//! Contact form submission.
//!
//! Checks run in a fixed order: cooldown, field validation, honeypot, then
//! the relay. Only a delivered message starts the cooldown.

use ironarch_core::{Environment, Storage};

use crate::{
    config::ContactConfig,
    cooldown::Cooldown,
    error::ContactError,
    form::ContactForm,
    relay::Relay,
};

/// Confirmation shown after a delivered message.
pub const SENT_MESSAGE: &str = "✓ Message sent. I will respond within a few days.";

/// Outcome of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Relay accepted the message.
    Sent,
    /// Honeypot was filled in; the message was dropped without contacting
    /// the relay.
    Discarded,
}

/// Submits contact forms through a relay.
pub struct ContactClient<E: Environment, S: Storage, R: Relay> {
    cooldown: Cooldown<E, S>,
    relay: R,
}

impl<E: Environment, S: Storage, R: Relay> ContactClient<E, S, R> {
    /// Client with the cooldown from `config`, stored in `session`.
    pub fn new(env: E, session: S, relay: R, config: &ContactConfig) -> Self {
        Self { cooldown: Cooldown::new(env, session, config.cooldown), relay }
    }

    /// The cooldown tracker.
    pub fn cooldown(&self) -> &Cooldown<E, S> {
        &self.cooldown
    }

    /// The relay.
    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Submit a form.
    ///
    /// # Errors
    ///
    /// - [`ContactError::RateLimited`] inside the cooldown
    /// - [`ContactError::Invalid`] with every failing field
    /// - [`ContactError::Rejected`] when the relay refuses the message
    /// - [`ContactError::Network`] when the relay is unreachable
    pub async fn submit(&self, form: &ContactForm) -> Result<Delivery, ContactError> {
        if let Some(remaining) = self.cooldown.remaining() {
            tracing::info!(remaining_secs = remaining.as_secs(), "contact cooldown active");
            return Err(ContactError::RateLimited { remaining });
        }

        let errors = form.validate();
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "contact form invalid");
            return Err(ContactError::Invalid(errors));
        }

        if form.is_spam() {
            tracing::info!("honeypot filled, dropping submission");
            return Ok(Delivery::Discarded);
        }

        let reply = self.relay.post(form).await?;
        if reply.accepted() {
            self.cooldown.record();
            tracing::info!(status = reply.status, "contact message delivered");
            return Ok(Delivery::Sent);
        }

        let messages = reply.messages();
        tracing::warn!(status = reply.status, errors = messages.len(), "relay rejected message");
        Err(ContactError::Rejected { messages })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::{
        sync::{
            Arc, Mutex,
            atomic::{AtomicU64, Ordering},
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use ironarch_core::{MemoryStorage, Timestamp};
    use serde_json::{Value, json};

    use super::*;
    use crate::{form::Field, relay::RelayReply};

    #[derive(Clone, Default)]
    struct TestEnv(Arc<AtomicU64>);

    impl TestEnv {
        fn advance(&self, d: Duration) {
            self.0.fetch_add(u64::try_from(d.as_millis()).unwrap(), Ordering::SeqCst);
        }
    }

    impl Environment for TestEnv {
        fn now(&self) -> Timestamp {
            Timestamp::from_millis(self.0.load(Ordering::SeqCst))
        }
    }

    /// Relay answering with a fixed reply and counting calls.
    struct StubRelay {
        reply: Result<RelayReply, ContactError>,
        posted: Mutex<Vec<ContactForm>>,
    }

    impl StubRelay {
        fn replying(status: u16, body: Value) -> Self {
            Self { reply: Ok(RelayReply { status, body }), posted: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> usize {
            self.posted.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Relay for StubRelay {
        async fn post(&self, form: &ContactForm) -> Result<RelayReply, ContactError> {
            self.posted.lock().unwrap().push(form.clone());
            self.reply.clone()
        }
    }

    fn form() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Loved the buffer overflow write-up.")
    }

    fn client(
        env: &TestEnv,
        relay: StubRelay,
    ) -> ContactClient<TestEnv, MemoryStorage, StubRelay> {
        ContactClient::new(env.clone(), MemoryStorage::new(), relay, &ContactConfig::default())
    }

    #[tokio::test]
    async fn delivered_message_starts_cooldown() {
        let env = TestEnv::default();
        let client = client(&env, StubRelay::replying(200, json!({"ok": true})));

        assert_eq!(client.submit(&form()).await.unwrap(), Delivery::Sent);

        let err = client.submit(&form()).await.unwrap_err();
        assert_eq!(err, ContactError::RateLimited { remaining: Duration::from_secs(60) });
        assert_eq!(client.relay().calls(), 1);

        env.advance(Duration::from_secs(60));
        assert_eq!(client.submit(&form()).await.unwrap(), Delivery::Sent);
        assert_eq!(client.relay().calls(), 2);
    }

    #[tokio::test]
    async fn honeypot_discards_without_posting() {
        let env = TestEnv::default();
        let client = client(&env, StubRelay::replying(200, Value::Null));
        let mut form = form();
        form.gotcha = "buy now".to_string();

        assert_eq!(client.submit(&form).await.unwrap(), Delivery::Discarded);
        assert_eq!(client.relay().calls(), 0);
        assert_eq!(client.cooldown().remaining(), None);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_relay() {
        let env = TestEnv::default();
        let client = client(&env, StubRelay::replying(200, Value::Null));
        let mut form = ContactForm::new("A", "ada@example.com", "too short");
        form.gotcha = "bot".to_string();

        let err = client.submit(&form).await.unwrap_err();

        match err {
            ContactError::Invalid(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec![Field::Name, Field::Message]);
            },
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(client.relay().calls(), 0);
    }

    #[tokio::test]
    async fn rejection_carries_relay_messages() {
        let env = TestEnv::default();
        let client = client(
            &env,
            StubRelay::replying(422, json!({"errors": [{"message": "Form not found"}]})),
        );

        let err = client.submit(&form()).await.unwrap_err();

        assert_eq!(err, ContactError::Rejected { messages: vec!["Form not found".to_string()] });
        assert_eq!(client.cooldown().remaining(), None);
    }

    #[tokio::test]
    async fn network_failure_is_reported() {
        let env = TestEnv::default();
        let relay = StubRelay {
            reply: Err(ContactError::Network { reason: "connection refused".to_string() }),
            posted: Mutex::new(Vec::new()),
        };
        let client = client(&env, relay);

        let err = client.submit(&form()).await.unwrap_err();

        assert_eq!(err.to_string(), "Network error. Check your connection and try again.");
        assert_eq!(client.cooldown().remaining(), None);
    }

    #[tokio::test]
    async fn cooldown_checked_before_validation() {
        let env = TestEnv::default();
        let client = client(&env, StubRelay::replying(200, Value::Null));
        client.submit(&form()).await.unwrap();

        let err = client.submit(&ContactForm::default()).await.unwrap_err();

        assert!(matches!(err, ContactError::RateLimited { .. }));
    }
}
