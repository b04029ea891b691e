use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::{API_URL_ENV, CONFIG_FILE, DEFAULT_API_URL, REQUEST_TIMEOUT};
use crate::error::{ClubError, ClubResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Backend base URL: env var, then config file, then the built-in default.
    pub fn api_url(&self) -> String {
        resolve_api_url(env::var(API_URL_ENV).ok(), self)
    }

    pub fn request_timeout(&self) -> Duration {
        match self.timeout_secs {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => REQUEST_TIMEOUT,
        }
    }
}

pub fn resolve_api_url(from_env: Option<String>, config: &Config) -> String {
    let raw = from_env
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    raw.trim().trim_end_matches('/').to_string()
}

pub fn config_path() -> ClubResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ClubError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(_) => Config::default(),
    }
}

pub fn load_config_from(path: &Path) -> Config {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> ClubResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> ClubResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_beats_config_file() {
        let config = Config {
            api_url: Some("https://from-config.example/api".to_string()),
            timeout_secs: None,
        };
        let url = resolve_api_url(Some("https://from-env.example/api/".to_string()), &config);
        assert_eq!(url, "https://from-env.example/api");
    }

    #[test]
    fn blank_env_falls_through_to_default() {
        let url = resolve_api_url(Some("  ".to_string()), &Config::default());
        assert_eq!(url, DEFAULT_API_URL);
    }

    #[test]
    fn zero_timeout_uses_fixed_ceiling() {
        let config = Config { api_url: None, timeout_secs: Some(0) };
        assert_eq!(config.request_timeout(), REQUEST_TIMEOUT);

        let config = Config { api_url: None, timeout_secs: Some(3) };
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }
}
