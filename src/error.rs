use serde_json::Value;
use thiserror::Error;

/// Coarse classification of a failed backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Timeout,
    /// 4xx other than 401, usually with backend validation details
    Validation,
    Unauthorized,
    /// 5xx or anything we can't place
    Server,
}

/// A backend failure normalized to `{message, status, data}`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
    pub data: Option<Value>,
    timed_out: bool,
}

impl ApiError {
    /// Build from an HTTP error response. The backend's own `message` wins
    /// over the generic status line.
    pub fn from_response(status: u16, data: Option<Value>) -> Self {
        let message = data
            .as_ref()
            .and_then(|d| d.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        Self {
            message,
            status: Some(status),
            data,
            timed_out: false,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            data: None,
            timed_out: false,
        }
    }

    pub fn timeout() -> Self {
        Self {
            message: "Request timed out".to_string(),
            status: None,
            data: None,
            timed_out: true,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self.status {
            None if self.timed_out => ApiErrorKind::Timeout,
            None => ApiErrorKind::Network,
            Some(401) => ApiErrorKind::Unauthorized,
            Some(s) if (400..500).contains(&s) => ApiErrorKind::Validation,
            Some(_) => ApiErrorKind::Server,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    /// Validation detail strings from a `{"details": [...]}` body.
    pub fn details(&self) -> Vec<String> {
        self.data
            .as_ref()
            .and_then(|d| d.get("details"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The backend's `error` field, used by the login and contact endpoints.
    pub fn backend_error(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.get("error"))
            .and_then(Value::as_str)
    }

    /// Human-readable message for a form: joined validation details when
    /// the backend sent some, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        let details = self.details();
        if details.is_empty() {
            fallback.to_string()
        } else {
            details.join(", ")
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ClubError {
    #[error("Not logged in. Run 'csquare login' first.")]
    NotAuthenticated,

    #[error("{0}")]
    Locked(String),

    #[error("{0}")]
    Failed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type ClubResult<T> = Result<T, ClubError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ClubResult<T>;
    fn with_context<F>(self, f: F) -> ClubResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ClubResult<T> {
        self.map_err(|e| ClubError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ClubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClubError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ClubResult<T> {
        self.ok_or_else(|| ClubError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ClubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ClubError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! club_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::ClubError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::ClubError::$error_type(format!($fmt, $($arg)*))
    };
}
