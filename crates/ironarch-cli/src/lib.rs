//! Command-line front end for the Iron Architect site core.
//!
//! The binary stands in for a browser tab: the state directory plays the
//! part of browser storage, stdin the passphrase prompt and stdout the page.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod args;
pub mod commands;
pub mod error;
pub mod system_env;

pub use args::{Cli, Command, SessionAction};
pub use commands::run;
pub use error::CliError;
pub use system_env::SystemEnv;
