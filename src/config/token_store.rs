use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use serde_json::{Map, Value};

use crate::constants::{SESSION_FILE, TOKEN_KEY};
use crate::error::{ClubError, ClubResult};
use crate::logging::log_warn;

/// Durable client-side storage for the admin bearer token. Nothing else is
/// persisted between runs.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> ClubResult<()>;
    fn clear(&self);
}

pub type SharedTokenStore = Arc<dyn TokenStore>;

/// Stores `{"adminToken": "..."}` in a JSON file.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.csquare-session.json`
    pub fn in_home_dir() -> ClubResult<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| ClubError::ConfigError("Could not find home directory".to_string()))?;
        Ok(Self::new(home_dir.join(SESSION_FILE)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let value: Value = serde_json::from_str(&contents).ok()?;
        value
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }

    fn save(&self, token: &str) -> ClubResult<()> {
        let mut map = Map::new();
        map.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        let contents = serde_json::to_string_pretty(&Value::Object(map))?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            // mode only applies when the file is created
            if self.path.exists() {
                fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
            }
        }

        let mut file = options.open(&self.path)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                log_warn(&format!("Failed to remove session file {}: {}", self.path.display(), e));
            }
        }
    }
}

/// Process-local store, for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) -> ClubResult<()> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| ClubError::Unknown("token store poisoned".to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
