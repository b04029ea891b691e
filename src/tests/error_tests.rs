use serde_json::json;

use crate::club_error;
use crate::error::{ApiError, ApiErrorKind, ClubError, ErrorContext};

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    let club_result = result.context("Failed to read config file");

    match club_result {
        Err(ClubError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected ClubError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Session token not found");

    match result {
        Err(ClubError::Unknown(msg)) => assert_eq!(msg, "Session token not found"),
        _ => panic!("Expected ClubError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));

    let club_result = result.with_context(|| {
        format!("Failed to write session file: {}", "/tmp/session.json")
    });

    match club_result {
        Err(ClubError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write session file: /tmp/session.json"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected ClubError::Unknown"),
    }
}

#[test]
fn test_club_error_macro() {
    let error = club_error!(Failed, "Request failed");
    match error {
        ClubError::Failed(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected ClubError::Failed"),
    }

    let error = club_error!(InvalidInput, "Unknown message type '{}'", "spam");
    match error {
        ClubError::InvalidInput(msg) => assert_eq!(msg, "Unknown message type 'spam'"),
        _ => panic!("Expected ClubError::InvalidInput"),
    }
}

#[test]
fn test_backend_message_wins_over_status_line() {
    let error = ApiError::from_response(404, Some(json!({ "message": "Event not found" })));
    assert_eq!(error.message, "Event not found");
    assert_eq!(error.status, Some(404));

    let error = ApiError::from_response(502, Some(json!("Bad Gateway")));
    assert_eq!(error.message, "Request failed with status code 502");
    assert_eq!(error.data, Some(json!("Bad Gateway")));
}

#[test]
fn test_error_kinds() {
    assert_eq!(ApiError::network("refused").kind(), ApiErrorKind::Network);
    assert_eq!(ApiError::timeout().kind(), ApiErrorKind::Timeout);
    assert_eq!(ApiError::from_response(401, None).kind(), ApiErrorKind::Unauthorized);
    assert_eq!(ApiError::from_response(422, None).kind(), ApiErrorKind::Validation);
    assert_eq!(ApiError::from_response(500, None).kind(), ApiErrorKind::Server);
    assert!(ApiError::from_response(401, None).is_unauthorized());
}

#[test]
fn test_details_and_backend_error() {
    let error = ApiError::from_response(
        400,
        Some(json!({ "error": "Validation failed", "details": ["Title is required", 7, "Date is invalid"] })),
    );

    assert_eq!(error.details(), vec!["Title is required", "Date is invalid"]);
    assert_eq!(error.backend_error(), Some("Validation failed"));
    assert_eq!(error.user_message("Failed to add event"), "Title is required, Date is invalid");

    let bare = ApiError::from_response(400, None);
    assert!(bare.details().is_empty());
    assert_eq!(bare.user_message("Failed to add event"), "Failed to add event");
}

#[test]
fn test_api_error_converts_into_club_error() {
    let error: ClubError = ApiError::network("Network error: connection refused").into();
    assert_eq!(error.to_string(), "API request failed: Network error: connection refused");
}
