//! Contact form for the Iron Architect site.
//!
//! Validates the form, drops honeypot submissions, enforces a per-session
//! cooldown and forwards the message to a third-party mail relay. The site
//! never sees the owner's address; the relay delivers it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod client;
pub mod config;
pub mod cooldown;
pub mod error;
pub mod form;
pub mod relay;

pub use client::{ContactClient, Delivery, SENT_MESSAGE};
pub use config::{CONTACT_COOLDOWN, ContactConfig, DEFAULT_ENDPOINT, LAST_SUBMIT_KEY};
pub use cooldown::Cooldown;
pub use error::{ContactError, GENERIC_FAILURE};
pub use form::{ContactForm, Field, FieldError};
pub use relay::{HttpRelay, Relay, RelayReply};
