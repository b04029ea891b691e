use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::client::Backend;
use crate::config::SharedTokenStore;
use crate::constants::{LOGIN_PATH, VERIFY_PATH};
use crate::error::{ApiError, ApiResult, ClubError, ClubResult};
use crate::logging::{log_debug, log_error, log_warn};

/// Broadcast to anyone watching the session when the backend rejects the
/// stored token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    Unauthorized { status: u16 },
}

/// reqwest-backed adapter for the club REST API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    tokens: SharedTokenStore,
    auth_events: broadcast::Sender<AuthEvent>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, tokens: SharedTokenStore) -> ClubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ClubError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        let (auth_events, _) = broadcast::channel(16);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            auth_events,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.auth_events.subscribe()
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let token = self.tokens.load();
        log_debug(&format!("API Request: {} {} (has token: {})", method, path, token.is_some()));

        let mut request = self.client.request(method.clone(), &url);
        if let Some(token) = &token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        let payload = parse_body(&text);

        if status.is_success() {
            log_debug(&format!("API Response: {} {} {}", status.as_u16(), method, path));
            return Ok(payload.unwrap_or(Value::Null));
        }

        let error = ApiError::from_response(status.as_u16(), payload);
        log_error(&format!("API Error: {} {} {} - {}", status.as_u16(), method, path, error.message));

        if error.is_unauthorized() && !is_auth_path(path) {
            log_warn("Authentication failed, removing token");
            self.tokens.clear();
            // no subscribers is fine
            let _ = self.auth_events.send(AuthEvent::Unauthorized { status: 401 });
        }

        Err(error)
    }
}

impl Backend for ApiClient {
    async fn get(&self, path: &str) -> ApiResult<Value> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.send(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.send(Method::DELETE, path, None).await
    }
}

/// Login and verification answer 401 for bad credentials; that must not
/// wipe the session.
pub fn is_auth_path(path: &str) -> bool {
    path.contains(LOGIN_PATH) || path.contains(VERIFY_PATH)
}

/// Non-JSON bodies are kept as a string so the error still carries them.
pub fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}

fn transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout()
    } else {
        ApiError::network(format!("Network error: {}", error))
    }
}
