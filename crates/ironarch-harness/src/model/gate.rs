//! Model gate - the reference implementation.

use std::time::Duration;

use ironarch_core::{LOCKOUT_DURATION, MAX_ATTEMPTS, Mode};

use super::operation::{Operation, OperationResult};

/// State visible from outside a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservableState {
    /// Runtime mode.
    pub mode: Mode,
    /// Failures in the current, unexpired window.
    pub failures: u32,
}

/// Model gate.
///
/// Tracks the runtime mode, the persisted flag and the failure window in
/// milliseconds on a private clock.
#[derive(Debug, Clone)]
pub struct ModelGate {
    now_ms: u64,
    window_ms: u64,
    max_attempts: u32,
    owner: bool,
    flag: bool,
    /// `(count, since_ms)` of the current window.
    failures: Option<(u32, u64)>,
}

impl ModelGate {
    /// Model using the production limits.
    pub fn new() -> Self {
        Self::with_limits(MAX_ATTEMPTS, LOCKOUT_DURATION)
    }

    /// Model with custom limits.
    pub fn with_limits(max_attempts: u32, window: Duration) -> Self {
        Self {
            now_ms: 0,
            window_ms: u64::try_from(window.as_millis()).unwrap_or(u64::MAX),
            max_attempts,
            owner: false,
            flag: false,
            failures: None,
        }
    }

    /// Apply an operation and return the result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match *op {
            Operation::Submit { blank: true, .. } => OperationResult::Ignored,
            Operation::Submit { correct, .. } => self.submit(correct),
            Operation::Logout => {
                self.flag = false;
                self.owner = false;
                OperationResult::Done
            },
            Operation::Reload => {
                self.owner = self.flag;
                OperationResult::Done
            },
            Operation::AdvanceTime { secs } => {
                self.now_ms = self.now_ms.saturating_add(u64::from(secs) * 1000);
                OperationResult::Done
            },
        }
    }

    fn submit(&mut self, correct: bool) -> OperationResult {
        self.expire();

        if let Some((count, _)) = self.failures {
            if count >= self.max_attempts {
                return OperationResult::RateLimited;
            }
        }

        if correct {
            self.failures = None;
            self.flag = true;
            self.owner = true;
            OperationResult::Accepted
        } else {
            let (count, since) = self.failures.unwrap_or((0, self.now_ms));
            self.failures = Some((count.saturating_add(1), since));
            OperationResult::Rejected
        }
    }

    fn expire(&mut self) {
        if let Some((_, since)) = self.failures {
            if self.now_ms.saturating_sub(since) >= self.window_ms {
                self.failures = None;
            }
        }
    }

    /// Whether a submit right now would be rate limited.
    pub fn is_locked_out(&self) -> bool {
        self.current_failures() >= self.max_attempts
    }

    fn current_failures(&self) -> u32 {
        match self.failures {
            Some((count, since)) if self.now_ms.saturating_sub(since) < self.window_ms => count,
            _ => 0,
        }
    }

    /// Observable state for oracle comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            mode: if self.owner { Mode::Owner } else { Mode::Public },
            failures: self.current_failures(),
        }
    }
}

impl Default for ModelGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRONG: Operation = Operation::Submit { correct: false, blank: false };
    const RIGHT: Operation = Operation::Submit { correct: true, blank: false };

    #[test]
    fn five_failures_lock_out_until_window_passes() {
        let mut model = ModelGate::new();
        for _ in 0..5 {
            assert_eq!(model.apply(&WRONG), OperationResult::Rejected);
        }
        assert_eq!(model.apply(&RIGHT), OperationResult::RateLimited);

        model.apply(&Operation::AdvanceTime { secs: 900 });

        assert_eq!(model.apply(&RIGHT), OperationResult::Accepted);
        assert_eq!(model.observable_state().mode, Mode::Owner);
    }

    #[test]
    fn reload_after_logout_is_public() {
        let mut model = ModelGate::new();
        model.apply(&RIGHT);
        model.apply(&Operation::Logout);
        model.apply(&Operation::Reload);
        assert_eq!(model.observable_state().mode, Mode::Public);
    }
}
