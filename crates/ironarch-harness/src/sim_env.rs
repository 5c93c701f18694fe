//! Manual clock for deterministic tests.
//!
//! Every clone of a `SimEnv` reads the same clock, so a gate, a cooldown and
//! the test itself all see time move together when the test advances it.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use ironarch_core::{Environment, Timestamp};

/// Arbitrary but realistic starting time (2023-11-14).
pub const SIM_EPOCH: Timestamp = Timestamp::from_millis(1_700_000_000_000);

/// Simulated environment with a manually advanced clock.
#[derive(Debug, Clone)]
pub struct SimEnv {
    clock: Arc<AtomicU64>,
}

impl SimEnv {
    /// Clock starting at [`SIM_EPOCH`].
    pub fn new() -> Self {
        Self::at(SIM_EPOCH)
    }

    /// Clock starting at `start`.
    pub fn at(start: Timestamp) -> Self {
        Self { clock: Arc::new(AtomicU64::new(start.as_millis())) }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let millis = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        let _ = self
            .clock
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| Some(now.saturating_add(millis)));
    }

    /// Set the clock. Moving it backwards is allowed; elapsed time saturates.
    pub fn set(&self, to: Timestamp) {
        self.clock.store(to.as_millis(), Ordering::SeqCst);
    }
}

impl Default for SimEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SimEnv {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.clock.load(Ordering::SeqCst))
    }
}
