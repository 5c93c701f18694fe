//! Deterministic test harness for the Iron Architect owner gate.
//!
//! Provides a manually advanced clock, a simulated tab that can be reloaded
//! or moved to a fresh browsing session, and a reference model of the
//! lockout rules.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation for model-based
//! testing. Operations are applied to both the model and a real gate, and
//! their results and observable states are compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod sim_env;
pub mod sim_page;

pub use model::{ModelGate, ObservableState, Operation, OperationResult};
pub use sim_env::{SIM_EPOCH, SimEnv};
pub use sim_page::{SIM_PASSPHRASE, SimPage};
