//! Session token storage layered on top of `KeychainProvider`.
//!
//! `security::keychain` stores arbitrary secrets in the platform keychain;
//! this module maps the [`TokenStore`] key-value contract onto it so the
//! session manager can persist credentials across restarts.

use async_trait::async_trait;

use crate::auth::session::SessionError;
use crate::auth::traits::TokenStore;
use crate::security::{KeychainError, KeychainProvider};

impl From<KeychainError> for SessionError {
    fn from(err: KeychainError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[async_trait]
impl TokenStore for KeychainProvider {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        match self.get_secret(key) {
            Ok(value) => Ok(Some(value)),
            Err(KeychainError::NotFound) => Ok(None),
            Err(other) => Err(other.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.set_secret(key, value).map_err(Into::into)
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.delete_secret(key).map_err(Into::into)
    }
}
