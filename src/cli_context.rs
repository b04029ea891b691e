use std::sync::Arc;

use crate::admin::AdminPanel;
use crate::client::{ApiClient, ClubApi};
use crate::config::{load_config, Config, FileTokenStore, SharedTokenStore};
use crate::error::{ClubError, ClubResult};
use crate::session::{SessionController, SessionState};

/// Central context for CLI operations: resolved configuration plus the
/// token store every client built from it shares.
pub struct CliContext {
    config: Config,
    api_url: String,
    tokens: SharedTokenStore,
}

impl CliContext {
    /// Load context from the config file, environment and session file.
    pub fn load() -> ClubResult<Self> {
        let config = load_config();
        let tokens: SharedTokenStore = Arc::new(FileTokenStore::in_home_dir()?);
        Ok(Self::from_parts(config, None, tokens))
    }

    fn from_parts(config: Config, api_url: Option<String>, tokens: SharedTokenStore) -> Self {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| config.api_url());
        Self {
            config,
            api_url,
            tokens,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tokens(&self) -> SharedTokenStore {
        self.tokens.clone()
    }

    pub fn has_token(&self) -> bool {
        self.tokens.load().is_some()
    }

    pub fn http_client(&self) -> ClubResult<ApiClient> {
        ApiClient::new(&self.api_url, self.config.request_timeout(), self.tokens.clone())
    }

    pub fn api(&self) -> ClubResult<ClubApi<ApiClient>> {
        Ok(ClubApi::new(self.http_client()?))
    }

    /// Admin panel in its start-up state; the stored token is not checked yet.
    pub fn admin_panel(&self) -> ClubResult<AdminPanel<ApiClient>> {
        let session = SessionController::start(self.tokens.clone());
        Ok(AdminPanel::new(self.api()?, session))
    }

    /// Admin panel whose stored token the backend has just accepted.
    pub async fn authenticated_panel(&self) -> ClubResult<AdminPanel<ApiClient>> {
        let mut panel = self.admin_panel()?;
        match panel.resume().await {
            SessionState::Authenticated => Ok(panel),
            _ => Err(ClubError::NotAuthenticated),
        }
    }
}

/// Builder for contexts with explicit overrides, mainly for `--api-url` and tests.
pub struct CliContextBuilder {
    config: Option<Config>,
    api_url: Option<String>,
    tokens: Option<SharedTokenStore>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            api_url: None,
            tokens: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_token_store(mut self, tokens: SharedTokenStore) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn build(self) -> ClubResult<CliContext> {
        let config = self.config.unwrap_or_else(load_config);
        let tokens = match self.tokens {
            Some(tokens) => tokens,
            None => Arc::new(FileTokenStore::in_home_dir()?),
        };
        Ok(CliContext::from_parts(config, self.api_url, tokens))
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
