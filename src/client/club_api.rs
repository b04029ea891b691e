use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::client::Backend;
use crate::constants::{CONTACT_PATH, EVENTS_PATH, GALLERY_PATH, LOGIN_PATH, TEAM_PATH, VERIFY_PATH};
use crate::error::{ApiError, ApiResult};
use crate::models::*;

/// Typed endpoints on top of a raw [`Backend`].
pub struct ClubApi<B> {
    backend: B,
}

impl<B: Backend> ClubApi<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let payload = self.backend.get(path).await?;
        let envelope: ListEnvelope<T> = decode(payload)?;
        Ok(envelope.into_items())
    }

    pub async fn list_events(&self) -> ApiResult<Vec<Event>> {
        self.list(EVENTS_PATH).await
    }

    pub async fn list_team(&self) -> ApiResult<Vec<TeamMember>> {
        self.list(TEAM_PATH).await
    }

    pub async fn list_gallery(&self) -> ApiResult<Vec<GalleryItem>> {
        self.list(GALLERY_PATH).await
    }

    pub async fn create<P: Serialize>(&self, path: &str, payload: &P) -> ApiResult<Value> {
        self.backend.post(path, &encode(payload)?).await
    }

    pub async fn update<P: Serialize>(&self, path: &str, id: &str, payload: &P) -> ApiResult<Value> {
        self.backend.put(&item_path(path, id), &encode(payload)?).await
    }

    pub async fn remove(&self, path: &str, id: &str) -> ApiResult<Value> {
        self.backend.delete(&item_path(path, id)).await
    }

    /// Returns the new bearer token.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let body = json!({ "username": username, "password": password });
        let payload = self.backend.post(LOGIN_PATH, &body).await?;
        let envelope: LoginEnvelope = decode(payload)?;
        Ok(envelope.data.token)
    }

    /// The adapter attaches the stored token; the body is empty.
    pub async fn verify(&self) -> ApiResult<bool> {
        let payload = self.backend.post(VERIFY_PATH, &json!({})).await?;
        let response: VerifyResponse = decode(payload)?;
        Ok(response.is_valid())
    }

    pub async fn send_contact(&self, message: &ContactMessage) -> ApiResult<()> {
        self.backend.post(CONTACT_PATH, &encode(message)?).await?;
        Ok(())
    }
}

pub fn item_path(path: &str, id: &str) -> String {
    format!("{}/{}", path, id)
}

fn decode<T: DeserializeOwned>(payload: Value) -> ApiResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::network(format!("Unexpected response from server: {}", e)))
}

fn encode<P: Serialize>(payload: &P) -> ApiResult<Value> {
    serde_json::to_value(payload)
        .map_err(|e| ApiError::network(format!("Could not encode request: {}", e)))
}
