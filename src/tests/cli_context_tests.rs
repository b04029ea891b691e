use std::sync::Arc;

use crate::cli_context::CliContextBuilder;
use crate::config::{Config, MemoryTokenStore, SharedTokenStore};

fn memory_store(token: Option<&str>) -> SharedTokenStore {
    match token {
        Some(token) => Arc::new(MemoryTokenStore::with_token(token)),
        None => Arc::new(MemoryTokenStore::new()),
    }
}

#[test]
fn test_cli_context_builder() {
    let context = CliContextBuilder::new()
        .with_config(Config::default())
        .with_api_url("https://club.example.com/api/")
        .with_token_store(memory_store(Some("abc")))
        .build();

    assert!(context.is_ok());
    let context = context.unwrap();

    assert_eq!(context.api_url(), "https://club.example.com/api");
    assert!(context.has_token());
}

#[test]
fn test_config_url_used_without_override() {
    let config = Config {
        api_url: Some("http://backend:5000/api".to_string()),
        timeout_secs: None,
    };
    let context = CliContextBuilder::new()
        .with_config(config)
        .with_token_store(memory_store(None))
        .build()
        .unwrap();

    // CSQUARE_API_URL may be set in the environment running the tests
    if std::env::var(crate::constants::API_URL_ENV).is_err() {
        assert_eq!(context.api_url(), "http://backend:5000/api");
    }
    assert!(!context.has_token());
}

#[test]
fn test_clients_share_the_token_store() {
    let tokens = memory_store(None);
    let context = CliContextBuilder::new()
        .with_config(Config::default())
        .with_api_url("http://localhost:5000/api")
        .with_token_store(tokens.clone())
        .build()
        .unwrap();

    tokens.save("fresh").unwrap();

    assert!(context.has_token());
    assert_eq!(context.tokens().load().as_deref(), Some("fresh"));
    assert!(context.http_client().is_ok());
}

#[tokio::test]
async fn test_authenticated_panel_requires_token() {
    let context = CliContextBuilder::new()
        .with_config(Config::default())
        .with_api_url("http://127.0.0.1:9/api")
        .with_token_store(memory_store(None))
        .build()
        .unwrap();

    let result = context.authenticated_panel().await;
    assert!(matches!(result, Err(crate::error::ClubError::NotAuthenticated)));
}
