use std::time::{Duration, Instant};

use crate::constants::{LOCKOUT_DURATION, MAX_LOGIN_ATTEMPTS};

/// Counts consecutive failed logins and holds the temporary lockout.
///
/// UX only. The counter lives in memory and resets with the process; the
/// backend keeps no record of it.
#[derive(Debug, Clone)]
pub struct LoginGuard {
    failed_attempts: u32,
    locked_until: Option<Instant>,
    max_attempts: u32,
    lockout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    /// Still allowed to try; how many failures so far.
    Counted { attempts: u32, remaining: u32 },
    Locked { until: Instant },
}

impl LoginGuard {
    pub fn new() -> Self {
        Self::with_policy(MAX_LOGIN_ATTEMPTS, LOCKOUT_DURATION)
    }

    pub fn with_policy(max_attempts: u32, lockout: Duration) -> Self {
        Self {
            failed_attempts: 0,
            locked_until: None,
            max_attempts,
            lockout,
        }
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Lift an expired lockout. Returns the deadline while still locked.
    pub fn check(&mut self, now: Instant) -> Option<Instant> {
        match self.locked_until {
            Some(until) if now >= until => {
                self.locked_until = None;
                self.failed_attempts = 0;
                None
            }
            other => other,
        }
    }

    pub fn record_failure(&mut self, now: Instant) -> FailureOutcome {
        self.failed_attempts += 1;

        if self.failed_attempts >= self.max_attempts {
            let until = now + self.lockout;
            self.locked_until = Some(until);
            FailureOutcome::Locked { until }
        } else {
            FailureOutcome::Counted {
                attempts: self.failed_attempts,
                remaining: self.max_attempts - self.failed_attempts,
            }
        }
    }

    pub fn record_success(&mut self) {
        self.failed_attempts = 0;
        self.locked_until = None;
    }
}

impl Default for LoginGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_failure_locks() {
        let start = Instant::now();
        let mut guard = LoginGuard::new();

        assert_eq!(
            guard.record_failure(start),
            FailureOutcome::Counted { attempts: 1, remaining: 2 }
        );
        assert_eq!(
            guard.record_failure(start),
            FailureOutcome::Counted { attempts: 2, remaining: 1 }
        );
        assert_eq!(
            guard.record_failure(start),
            FailureOutcome::Locked { until: start + LOCKOUT_DURATION }
        );
        assert!(guard.check(start + Duration::from_secs(299)).is_some());
    }

    #[test]
    fn lockout_expires_and_resets_counter() {
        let start = Instant::now();
        let mut guard = LoginGuard::with_policy(2, Duration::from_secs(10));
        guard.record_failure(start);
        guard.record_failure(start);

        assert!(guard.check(start + Duration::from_secs(10)).is_none());
        assert_eq!(guard.failed_attempts(), 0);
    }

    #[test]
    fn success_clears_failures() {
        let mut guard = LoginGuard::new();
        guard.record_failure(Instant::now());
        guard.record_success();
        assert_eq!(guard.failed_attempts(), 0);
    }
}
