//! Shared helpers for `eventpass-infra` integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use eventpass_common::auth::{MemoryTokenStore, SessionCredentials, TokenStore};
use eventpass_domain::{ApiConfig, Config};
use eventpass_infra::AppContext;
use wiremock::MockServer;

pub const OLD_ACCESS: &str = "old-access";
pub const OLD_REFRESH: &str = "old-refresh";
pub const NEW_ACCESS: &str = "new-access";
pub const NEW_REFRESH: &str = "new-refresh";

pub fn config_for(server: &MockServer) -> Config {
    Config {
        api: ApiConfig { base_url: server.uri(), ..Default::default() },
        ..Default::default()
    }
}

pub fn context_with_store(config: &Config, store: Arc<dyn TokenStore>) -> AppContext {
    AppContext::with_store(config, store).expect("context should build")
}

pub fn signed_out(server: &MockServer) -> AppContext {
    context_with_store(&config_for(server), Arc::new(MemoryTokenStore::new()))
}

pub async fn signed_in(server: &MockServer) -> AppContext {
    let context = signed_out(server);
    context
        .session
        .store(&SessionCredentials::new(OLD_ACCESS, OLD_REFRESH))
        .await
        .expect("seed credentials");
    context
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn refreshed_tokens() -> serde_json::Value {
    serde_json::json!({ "accessToken": NEW_ACCESS, "refreshToken": NEW_REFRESH })
}
