//! Traits for credential storage and token refresh
//!
//! These traits enable dependency injection and testing by abstracting
//! external dependencies (platform key-value store, refresh endpoint).

use async_trait::async_trait;

use super::session::SessionError;
use super::types::SessionCredentials;

/// Key-value store the session credentials are persisted in
///
/// Keys and values are opaque strings. Implementations must be safe to share
/// across tasks.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    /// Returns `SessionError::Storage` if the backend cannot be read. A
    /// missing key is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `SessionError::Storage` if the write fails
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Delete `key` (idempotent)
    ///
    /// # Errors
    /// Returns `SessionError::Storage` if the delete fails
    async fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Exchanges a refresh token for a fresh credential pair
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Refresh the session
    ///
    /// # Errors
    /// Returns `SessionError::RefreshFailed` if the server rejects the token
    /// or cannot be reached
    async fn refresh(&self, refresh_token: &str) -> Result<SessionCredentials, SessionError>;
}
