//! Session manager
//!
//! Single owner of the session credentials:
//! - Reads, writes and clears them through a [`TokenStore`]
//! - Writes both tokens together, never one alone
//! - Serializes refreshes so concurrent callers holding the same stale token
//!   trigger one refresh call between them
//! - Finishes a started refresh, and stores its result, even when the caller
//!   that started it is cancelled

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::traits::{TokenRefresher, TokenStore};
use super::types::{SessionCredentials, ACCESS_TOKEN_KEY, LEGACY_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The credential store could not be read or written
    #[error("Credential storage error: {0}")]
    Storage(String),

    /// No refresh token is stored (never logged in, or already cleared)
    #[error("No refresh token available")]
    NoRefreshToken,

    /// The refresh endpoint rejected the token or could not be reached
    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),
}

/// Owner of the access and refresh tokens
///
/// Shared via `Arc` between the API client and the auth flows.
pub struct SessionManager {
    store: Arc<dyn TokenStore>,
    refresher: Arc<dyn TokenRefresher>,
    refresh_lock: Arc<Mutex<()>>,
}

impl SessionManager {
    /// Create a session manager over a store and a refresher
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self { store, refresher, refresh_lock: Arc::new(Mutex::new(())) }
    }

    /// Load the stored credential pair
    ///
    /// # Returns
    /// `None` unless both tokens are present
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    pub async fn load(&self) -> Result<Option<SessionCredentials>, SessionError> {
        let access = self.store.get(ACCESS_TOKEN_KEY).await?;
        let refresh = self.store.get(REFRESH_TOKEN_KEY).await?;

        Ok(match (access, refresh) {
            (Some(access_token), Some(refresh_token)) => {
                Some(SessionCredentials { access_token, refresh_token })
            }
            _ => None,
        })
    }

    /// Persist a new credential pair (after login or refresh)
    ///
    /// If the second write fails the first is rolled back, so the store never
    /// holds an access token from one pair and a refresh token from another.
    ///
    /// # Errors
    /// Returns error if either write fails
    pub async fn store(&self, credentials: &SessionCredentials) -> Result<(), SessionError> {
        write_pair(self.store.as_ref(), credentials).await
    }

    /// Remove every stored credential, including the legacy key
    ///
    /// All removals are attempted even if one fails.
    ///
    /// # Errors
    /// Returns the first removal error
    pub async fn clear(&self) -> Result<(), SessionError> {
        remove_all(self.store.as_ref()).await
    }

    /// Current access token, falling back to the legacy key
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    pub async fn access_token(&self) -> Result<Option<String>, SessionError> {
        match self.store.get(ACCESS_TOKEN_KEY).await? {
            Some(token) => Ok(Some(token)),
            None => self.store.get(LEGACY_TOKEN_KEY).await,
        }
    }

    /// Whether any access token is stored
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    pub async fn is_authenticated(&self) -> Result<bool, SessionError> {
        Ok(self.access_token().await?.is_some())
    }

    /// Refresh the session after `stale_access_token` was rejected
    ///
    /// Refreshes are serialized. A caller that gets the lock after another
    /// caller already replaced the stale token receives the new token without
    /// a network call.
    ///
    /// On any refresh failure (including a missing refresh token) the stored
    /// credentials are cleared before the error is returned.
    ///
    /// The refresh call and the write of the new pair run on a spawned task.
    /// Dropping the returned future does not abandon them.
    ///
    /// # Returns
    /// The access token to retry with
    ///
    /// # Errors
    /// - `SessionError::NoRefreshToken` if no refresh token is stored
    /// - `SessionError::RefreshFailed` if the refresher fails
    /// - `SessionError::Storage` if the store fails
    pub async fn refresh_after(
        &self,
        stale_access_token: Option<&str>,
    ) -> Result<String, SessionError> {
        let guard = Arc::clone(&self.refresh_lock).lock_owned().await;

        if let Some(current) = self.access_token().await? {
            if stale_access_token != Some(current.as_str()) {
                debug!("Access token already replaced by a concurrent refresh");
                return Ok(current);
            }
        }

        let Some(refresh_token) = self.store.get(REFRESH_TOKEN_KEY).await? else {
            warn!("No refresh token stored, clearing session");
            clear_after_failure(self.store.as_ref()).await;
            return Err(SessionError::NoRefreshToken);
        };

        // The server rotates the refresh token as soon as it answers, so the
        // call and the write of the new pair run on their own task and finish
        // even if this future is dropped. The lock guard moves with them.
        let store = Arc::clone(&self.store);
        let refresher = Arc::clone(&self.refresher);
        let task = tokio::spawn(async move {
            let _guard = guard;
            match refresher.refresh(&refresh_token).await {
                Ok(credentials) => {
                    write_pair(store.as_ref(), &credentials).await?;
                    info!("Access token refreshed");
                    Ok(credentials.access_token)
                }
                Err(err) => {
                    warn!(error = %err, "Token refresh failed, clearing session");
                    clear_after_failure(store.as_ref()).await;
                    Err(match err {
                        SessionError::RefreshFailed(_) => err,
                        other => SessionError::RefreshFailed(other.to_string()),
                    })
                }
            }
        });

        task.await.map_err(|e| SessionError::RefreshFailed(format!("refresh task aborted: {e}")))?
    }
}

/// Write both tokens; roll back the access token if the refresh token
/// cannot be written.
async fn write_pair(
    store: &dyn TokenStore,
    credentials: &SessionCredentials,
) -> Result<(), SessionError> {
    store.set(ACCESS_TOKEN_KEY, &credentials.access_token).await?;

    if let Err(err) = store.set(REFRESH_TOKEN_KEY, &credentials.refresh_token).await {
        warn!(error = %err, "Refresh token write failed, rolling back access token");
        if let Err(rollback) = store.remove(ACCESS_TOKEN_KEY).await {
            warn!(error = %rollback, "Access token rollback failed");
        }
        return Err(err);
    }

    if let Err(err) = store.remove(LEGACY_TOKEN_KEY).await {
        debug!(error = %err, "Could not remove legacy token key");
    }

    info!("Session credentials stored");
    Ok(())
}

/// Attempt every removal; report the first failure.
async fn remove_all(store: &dyn TokenStore) -> Result<(), SessionError> {
    let mut first_error = None;

    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, LEGACY_TOKEN_KEY] {
        if let Err(err) = store.remove(key).await {
            warn!(key, error = %err, "Failed to remove stored credential");
            first_error.get_or_insert(err);
        }
    }

    info!("Session credentials cleared");
    first_error.map_or(Ok(()), Err)
}

async fn clear_after_failure(store: &dyn TokenStore) {
    if let Err(err) = remove_all(store).await {
        warn!(error = %err, "Could not clear credentials after refresh failure");
    }
}
