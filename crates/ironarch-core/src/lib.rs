//! Iron Architect core
//!
//! Owner-mode gate for a static portfolio site. Some curriculum and lab
//! entries are marked private; they are only rendered once the visitor has
//! entered the owner passphrase. This is a visibility toggle for casual
//! visitors, not access control: the reference fingerprint is public and the
//! persisted flag can be set by hand.
//!
//! # Architecture
//!
//! The gate is a pure state machine that:
//! - Receives events from the host (page load, passphrase, toggle, logout)
//! - Produces actions for the host to execute (update chrome, prompt, close)
//! - Uses the `Environment` trait for time (deterministic testing)
//! - Reads and writes storage only through [`SessionState`]
//!
//! # Components
//!
//! - [`AccessGate`]: mode state machine with failed-attempt lockout
//! - [`SessionState`]: owner of the persisted flag and attempt record
//! - [`ContentVisibility`]: the capability renderers receive
//! - [`GateDriver`]: listener-based wrapper around the gate

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod driver;
pub mod env;
pub mod error;
pub mod event;
pub mod gate;
pub mod session;
pub mod storage;
pub mod visibility;

pub use config::{DEFAULT_REFERENCE_HEX, GateConfig, LOCKOUT_DURATION, MAX_ATTEMPTS};
pub use driver::{GateDriver, GateListener};
pub use env::{Environment, Timestamp};
pub use error::{AuthError, StorageError};
pub use event::{Affordances, GateAction, GateEvent};
pub use gate::AccessGate;
pub use ironarch_crypto::Fingerprint;
pub use session::{AttemptRecord, Mode, SessionState};
pub use storage::{FileStorage, MemoryStorage, Storage, UnavailableStorage};
pub use visibility::{ContentVisibility, Visibility, Visible};
