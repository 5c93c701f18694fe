//! Production environment backed by the system clock.

use ironarch_core::{Environment, Timestamp};

/// Environment reading the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn now(&self) -> Timestamp {
        Timestamp::now_utc()
    }
}
