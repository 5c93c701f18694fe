//! Reference model for model-based testing.
//!
//! The model is a simplified gate that captures the lockout rules with plain
//! integers and booleans: no storage, no fingerprints, no actions. It serves
//! as the oracle against which the real gate is verified.
//!
//! # Design Principles
//!
//! - Simplicity: the model should be obviously correct
//! - Rules not mechanics: captures WHAT happens, not HOW it is stored
//! - Deterministic: same inputs produce same outputs

mod gate;
pub mod operation;

pub use gate::{ModelGate, ObservableState};
pub use operation::{Operation, OperationResult};
