// Module declarations
pub mod admin;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod forms;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod sections;
pub mod session;
pub mod status;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli_context::{CliContext, CliContextBuilder};
pub use client::{ApiClient, ClubApi};
pub use config::{load_config, Config};
pub use error::{ApiError, ClubError, ClubResult};
pub use models::*;
