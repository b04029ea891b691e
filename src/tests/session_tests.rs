use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use super::support::{store, FakeBackend, PASSWORD, TOKEN, USERNAME};
use crate::client::ClubApi;
use crate::constants::{LOCKOUT_DURATION, LOGIN_PATH, VERIFY_PATH};
use crate::config::TokenStore;
use crate::error::{ApiError, ClubError, ClubResult};
use crate::forms::Credentials;
use crate::session::{LoginOutcome, ManualClock, SessionController, SessionState};

fn api() -> ClubApi<FakeBackend> {
    ClubApi::new(FakeBackend::new())
}

#[tokio::test]
async fn test_login_stores_token_and_clears_form() {
    let api = api();
    let tokens = store(None);
    let mut session = SessionController::start(tokens.clone());
    let mut credentials = Credentials::new("  Admin ", PASSWORD);

    let outcome = session.login(&api, &mut credentials).await;

    assert_eq!(outcome, LoginOutcome::Success);
    assert_eq!(session.state(), SessionState::Authenticated);
    assert_eq!(tokens.load().as_deref(), Some(TOKEN));
    assert_eq!(credentials, Credentials::default());

    let sent = api.backend().last_body("POST").unwrap();
    assert_eq!(sent["username"], USERNAME);
}

#[tokio::test]
async fn test_empty_credentials_are_not_sent() {
    let api = api();
    let mut session = SessionController::start(store(None));
    let mut credentials = Credentials::new("admin", "   ");

    let outcome = session.login(&api, &mut credentials).await;

    assert_eq!(
        outcome,
        LoginOutcome::Invalid("Please enter both username and password".to_string())
    );
    assert_eq!(api.backend().count("POST", LOGIN_PATH), 0);
    assert_eq!(session.failed_attempts(), 0);
}

#[tokio::test]
async fn test_failed_login_keeps_username_and_counts() {
    let api = api();
    let mut session = SessionController::start(store(None));
    let mut credentials = Credentials::new("admin", "wrong");

    let outcome = session.login(&api, &mut credentials).await;

    match outcome {
        LoginOutcome::Failed { message, attempts, remaining } => {
            assert_eq!(attempts, 1);
            assert_eq!(remaining, 2);
            assert_eq!(message, "Invalid credentials (1/3 attempts, 2 remaining)");
        }
        other => panic!("Expected LoginOutcome::Failed, got {:?}", other),
    }
    assert_eq!(credentials.username, "admin");
    assert!(credentials.password.is_empty());
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_third_failure_locks_and_fourth_sends_nothing() {
    let api = api();
    let clock = Arc::new(ManualClock::new());
    let mut session = SessionController::with_clock(store(None), clock.clone());

    for _ in 0..2 {
        let mut credentials = Credentials::new("admin", "wrong");
        assert!(matches!(
            session.login(&api, &mut credentials).await,
            LoginOutcome::Failed { .. }
        ));
    }

    let mut credentials = Credentials::new("admin", "wrong");
    assert_eq!(
        session.login(&api, &mut credentials).await,
        LoginOutcome::LockedOut("Too many failed attempts. Account locked for 5 minutes.".to_string())
    );
    assert!(matches!(session.state(), SessionState::Locked { .. }));
    assert_eq!(session.lockout_remaining(), Some(LOCKOUT_DURATION.as_secs()));

    // Even the right password is refused while locked
    let mut credentials = Credentials::new(USERNAME, PASSWORD);
    assert!(matches!(
        session.login(&api, &mut credentials).await,
        LoginOutcome::Blocked(_)
    ));
    assert_eq!(api.backend().count("POST", LOGIN_PATH), 3);
    assert!(credentials.password.is_empty());
}

#[tokio::test]
async fn test_lockout_lifts_after_five_minutes() {
    let api = api();
    let clock = Arc::new(ManualClock::new());
    let mut session = SessionController::with_clock(store(None), clock.clone());

    for _ in 0..3 {
        let mut credentials = Credentials::new("admin", "wrong");
        session.login(&api, &mut credentials).await;
    }

    clock.advance(Duration::from_secs(4 * 60 + 59));
    assert!(matches!(session.state(), SessionState::Locked { .. }));
    assert_eq!(session.lockout_remaining(), Some(1));

    clock.advance(Duration::from_secs(1));
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(session.failed_attempts(), 0);

    let mut credentials = Credentials::new(USERNAME, PASSWORD);
    assert_eq!(session.login(&api, &mut credentials).await, LoginOutcome::Success);
}

#[tokio::test]
async fn test_success_resets_failure_count() {
    let api = api();
    let mut session = SessionController::start(store(None));

    let mut credentials = Credentials::new("admin", "wrong");
    session.login(&api, &mut credentials).await;
    assert_eq!(session.failed_attempts(), 1);

    let mut credentials = Credentials::new(USERNAME, PASSWORD);
    session.login(&api, &mut credentials).await;
    assert_eq!(session.failed_attempts(), 0);
}

#[tokio::test]
async fn test_start_without_token_skips_verification() {
    let api = api();
    let mut session = SessionController::start(store(None));

    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(session.verify(&api).await, SessionState::Unauthenticated);
    assert_eq!(api.backend().count("POST", VERIFY_PATH), 0);
}

#[tokio::test]
async fn test_stored_token_is_verified() {
    for answer in [json!({ "valid": true }), json!({ "success": true })] {
        let api = ClubApi::new(FakeBackend::new().with_verify(Ok(answer)));
        let tokens = store(Some("old-token"));
        let mut session = SessionController::start(tokens.clone());

        assert_eq!(session.state(), SessionState::Verifying);
        assert_eq!(session.verify(&api).await, SessionState::Authenticated);
        assert_eq!(tokens.load().as_deref(), Some("old-token"));
    }
}

#[tokio::test]
async fn test_rejected_token_is_discarded() {
    let answers = [
        Ok(json!({ "valid": false })),
        Ok(json!({})),
        Err(ApiError::from_response(401, None)),
        Err(ApiError::network("connection refused")),
    ];

    for answer in answers {
        let api = ClubApi::new(FakeBackend::new().with_verify(answer));
        let tokens = store(Some("old-token"));
        let mut session = SessionController::start(tokens.clone());

        assert_eq!(session.verify(&api).await, SessionState::Unauthenticated);
        assert_eq!(tokens.load(), None);
    }
}

#[test]
fn test_only_401_expires_the_session() {
    let tokens = store(Some("live"));
    let mut session = SessionController::start(tokens.clone());

    assert!(!session.observe(&ApiError::from_response(500, None)));
    assert_eq!(tokens.load().as_deref(), Some("live"));

    assert!(session.observe(&ApiError::from_response(401, None)));
    assert_eq!(tokens.load(), None);
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_logout_forgets_token() {
    let api = api();
    let tokens = store(None);
    let mut session = SessionController::start(tokens.clone());
    let mut credentials = Credentials::new(USERNAME, PASSWORD);
    session.login(&api, &mut credentials).await;

    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(tokens.load(), None);
}

struct ReadOnlyStore;

impl TokenStore for ReadOnlyStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) -> ClubResult<()> {
        Err(ClubError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only home",
        )))
    }

    fn clear(&self) {}
}

#[tokio::test]
async fn test_unsaved_token_does_not_open_session() {
    let api = api();
    let mut session = SessionController::start(Arc::new(ReadOnlyStore));
    let mut credentials = Credentials::new("admin", PASSWORD);

    let outcome = session.login(&api, &mut credentials).await;

    match &outcome {
        LoginOutcome::NotSaved(message) => {
            assert!(message.starts_with("Logged in, but the session could not be saved"));
            assert!(message.contains("read-only home"));
        }
        other => panic!("Expected LoginOutcome::NotSaved, got {:?}", other),
    }
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(session.failed_attempts(), 0);
    assert!(credentials.password.is_empty());
}
