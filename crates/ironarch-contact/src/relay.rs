//! Mail relay transport.
//!
//! The relay receives the three visible fields form-encoded and answers with
//! a status code and, usually, a JSON body such as `{"ok": true}` or
//! `{"errors": [{"message": "..."}]}`.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::{config::ContactConfig, error::ContactError, form::ContactForm};

/// What the relay answered.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayReply {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body, `Null` when the body was not JSON.
    pub body: Value,
}

impl RelayReply {
    /// Delivered when the status is 2xx or the body says `"ok": true`.
    pub fn accepted(&self) -> bool {
        (200..300).contains(&self.status) || self.body.get("ok") == Some(&Value::Bool(true))
    }

    /// `errors[].message` from the body.
    pub fn messages(&self) -> Vec<String> {
        self.body
            .get("errors")
            .and_then(Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.get("message").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Something that forwards a contact form to the site owner.
#[async_trait]
pub trait Relay: Send + Sync {
    /// Post the form's trimmed fields.
    ///
    /// # Errors
    ///
    /// [`ContactError::Network`] when the relay cannot be reached. A reply of
    /// any status is `Ok`.
    async fn post(&self, form: &ContactForm) -> Result<RelayReply, ContactError>;
}

/// Relay over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelay {
    /// Relay posting to `config.endpoint`.
    ///
    /// # Errors
    ///
    /// [`ContactError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &ContactConfig) -> Result<Self, ContactError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ContactError::Network { reason: e.to_string() })?;

        Ok(Self { client, endpoint: config.endpoint.clone() })
    }

    /// Endpoint this relay posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Relay for HttpRelay {
    async fn post(&self, form: &ContactForm) -> Result<RelayReply, ContactError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(&form.fields())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, endpoint = %self.endpoint, "relay unreachable");
                ContactError::Network { reason: e.to_string() }
            })?;

        let status = response.status().as_u16();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        tracing::debug!(status, "relay replied");
        Ok(RelayReply { status, body })
    }
}
