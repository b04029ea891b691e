use std::sync::Arc;
use std::time::Instant;

use crate::client::{Backend, ClubApi};
use crate::config::SharedTokenStore;
use crate::error::ApiError;
use crate::forms::Credentials;
use crate::logging::{log_error, log_info, log_warn};
use crate::session::clock::{Clock, SystemClock};
use crate::session::guard::{FailureOutcome, LoginGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Verifying,
    Authenticated,
    Locked { until: Instant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    /// Rejected locally before any request; does not count as an attempt.
    Invalid(String),
    Failed { message: String, attempts: u32, remaining: u32 },
    /// This failure tripped the lockout.
    LockedOut(String),
    /// Submitted while locked; nothing was sent.
    Blocked(String),
    /// The backend accepted the credentials but the token could not be
    /// stored, so the session was not opened.
    NotSaved(String),
}

impl LoginOutcome {
    pub fn message(&self) -> &str {
        match self {
            LoginOutcome::Success => "Login successful!",
            LoginOutcome::Invalid(m)
            | LoginOutcome::LockedOut(m)
            | LoginOutcome::Blocked(m)
            | LoginOutcome::NotSaved(m)
            | LoginOutcome::Failed { message: m, .. } => m,
        }
    }
}

/// Owns the admin session: token lifecycle, login attempts and lockout.
/// The token store is the only persistent state it touches.
pub struct SessionController {
    tokens: SharedTokenStore,
    state: SessionState,
    guard: LoginGuard,
    clock: Arc<dyn Clock>,
}

impl SessionController {
    /// `Verifying` when a token survived from an earlier run.
    pub fn start(tokens: SharedTokenStore) -> Self {
        Self::with_clock(tokens, Arc::new(SystemClock))
    }

    pub fn with_clock(tokens: SharedTokenStore, clock: Arc<dyn Clock>) -> Self {
        let state = if tokens.load().is_some() {
            SessionState::Verifying
        } else {
            SessionState::Unauthenticated
        };

        Self {
            tokens,
            state,
            guard: LoginGuard::new(),
            clock,
        }
    }

    /// Current state, lifting an expired lockout first.
    pub fn state(&mut self) -> SessionState {
        if let SessionState::Locked { .. } = self.state {
            if self.guard.check(self.clock.now()).is_none() {
                log_info("Login lockout expired");
                self.state = SessionState::Unauthenticated;
            }
        }
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    pub fn failed_attempts(&self) -> u32 {
        self.guard.failed_attempts()
    }

    /// Seconds left on the lockout, if locked.
    pub fn lockout_remaining(&mut self) -> Option<u64> {
        match self.state() {
            SessionState::Locked { until } => {
                Some(until.saturating_duration_since(self.clock.now()).as_secs())
            }
            _ => None,
        }
    }

    /// Check a token left over from an earlier run.
    pub async fn verify<B: Backend>(&mut self, api: &ClubApi<B>) -> SessionState {
        if self.tokens.load().is_none() {
            self.state = SessionState::Unauthenticated;
            return self.state;
        }

        self.state = SessionState::Verifying;
        match api.verify().await {
            Ok(true) => {
                log_info("Stored token verified");
                self.state = SessionState::Authenticated;
            }
            Ok(false) => {
                log_warn("Stored token rejected by backend");
                self.discard();
            }
            Err(e) => {
                log_warn(&format!("Token verification failed: {}", e));
                self.discard();
            }
        }
        self.state
    }

    /// Attempt a login. The password is always cleared afterwards; the
    /// username survives a failure so it can be retried.
    pub async fn login<B: Backend>(&mut self, api: &ClubApi<B>, credentials: &mut Credentials) -> LoginOutcome {
        if let SessionState::Locked { .. } = self.state() {
            credentials.clear_password();
            return LoginOutcome::Blocked("Please wait before trying again.".to_string());
        }

        let sanitized = match credentials.sanitized() {
            Ok(c) => c,
            Err(message) => return LoginOutcome::Invalid(message),
        };

        match api.login(&sanitized.username, &sanitized.password).await {
            Ok(token) => {
                self.guard.record_success();
                credentials.clear_password();
                if let Err(e) = self.tokens.save(&token) {
                    log_error(&format!("Failed to persist session token: {}", e));
                    self.state = SessionState::Unauthenticated;
                    return LoginOutcome::NotSaved(format!(
                        "Logged in, but the session could not be saved: {}",
                        e
                    ));
                }
                self.state = SessionState::Authenticated;
                credentials.clear();
                log_info(&format!("Logged in as {}", sanitized.username));
                LoginOutcome::Success
            }
            Err(e) => {
                credentials.clear_password();
                self.record_failure(&e)
            }
        }
    }

    fn record_failure(&mut self, error: &ApiError) -> LoginOutcome {
        log_warn(&format!("Login failed: {}", error));

        match self.guard.record_failure(self.clock.now()) {
            FailureOutcome::Locked { until } => {
                self.state = SessionState::Locked { until };
                LoginOutcome::LockedOut(
                    "Too many failed attempts. Account locked for 5 minutes.".to_string(),
                )
            }
            FailureOutcome::Counted { attempts, remaining } => {
                let reason = error
                    .backend_error()
                    .unwrap_or("Login failed. Please try again.");
                LoginOutcome::Failed {
                    message: format!(
                        "{} ({}/{} attempts, {} remaining)",
                        reason,
                        attempts,
                        self.guard.max_attempts(),
                        remaining
                    ),
                    attempts,
                    remaining,
                }
            }
        }
    }

    pub fn logout(&mut self) {
        log_info("Logged out");
        self.discard();
    }

    /// The backend no longer accepts our token.
    pub fn expire(&mut self) {
        if self.state == SessionState::Authenticated {
            log_warn("Session expired");
        }
        self.discard();
    }

    /// Expire the session if `error` is a 401. Returns whether it did.
    pub fn observe(&mut self, error: &ApiError) -> bool {
        if error.is_unauthorized() {
            self.expire();
            true
        } else {
            false
        }
    }

    fn discard(&mut self) {
        self.tokens.clear();
        if !matches!(self.state, SessionState::Locked { .. }) {
            self.state = SessionState::Unauthenticated;
        }
    }
}
