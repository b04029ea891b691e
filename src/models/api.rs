use serde::Deserialize;

/// `{"data": [...]}`. A missing or null `data` reads as an empty list.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Option<Vec<T>>,
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginEnvelope {
    pub data: LoginData,
}

/// Two shapes are in the wild: `{"valid": true}` and `{"success": true}`.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub success: Option<bool>,
}

impl VerifyResponse {
    pub fn is_valid(&self) -> bool {
        self.valid.unwrap_or(false) || self.success.unwrap_or(false)
    }
}
