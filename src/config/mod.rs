#[allow(clippy::module_inception)]
mod config;
mod token_store;

pub use config::{
    config_path, load_config, load_config_from, resolve_api_url, save_config, save_config_to,
    Config,
};
pub use token_store::{FileTokenStore, MemoryTokenStore, SharedTokenStore, TokenStore};
