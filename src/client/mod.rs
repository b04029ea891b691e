pub mod club_api;
pub mod http;

pub use club_api::ClubApi;
pub use http::{ApiClient, AuthEvent};

use serde_json::Value;

use crate::error::ApiResult;

/// Raw JSON verbs against the backend, relative to its base URL.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn get(&self, path: &str) -> ApiResult<Value>;
    async fn post(&self, path: &str, body: &Value) -> ApiResult<Value>;
    async fn put(&self, path: &str, body: &Value) -> ApiResult<Value>;
    async fn delete(&self, path: &str) -> ApiResult<Value>;
}
