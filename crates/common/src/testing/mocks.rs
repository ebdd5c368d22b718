//! Mock implementations of the session seams
//!
//! Clones share state, so a test can hand one clone to the code under test
//! and inspect the other.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::auth::{SessionCredentials, SessionError, TokenRefresher, TokenStore};

/// In-memory token store that can be told to fail writes
#[derive(Clone, Debug, Default)]
pub struct MockTokenStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    failing_keys: Arc<Mutex<HashSet<String>>>,
}

impl MockTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .extend(entries.into_iter().map(|(k, v)| (k.to_string(), v.to_string())));
        store
    }

    /// Make every `set` of `key` fail with `SessionError::Storage`.
    pub fn fail_writes_for(&self, key: &str) {
        self.failing_keys.lock().insert(key.to_string());
    }

    /// Current value for a key.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if self.failing_keys.lock().contains(key) {
            return Err(SessionError::Storage(format!("write to {key} rejected")));
        }
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Refresher that answers from a fixed outcome and records its calls
#[derive(Clone, Debug)]
pub struct MockTokenRefresher {
    outcome: Arc<Mutex<Result<SessionCredentials, SessionError>>>,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<String>>>,
    delay: Duration,
}

impl Default for MockTokenRefresher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTokenRefresher {
    /// Refresher that fails until configured otherwise.
    pub fn new() -> Self {
        Self::with_outcome(Err(SessionError::RefreshFailed("no refresh response configured".into())))
    }

    /// Refresher that always returns `credentials`.
    pub fn returning(credentials: SessionCredentials) -> Self {
        Self::with_outcome(Ok(credentials))
    }

    /// Refresher that always fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Err(SessionError::RefreshFailed(message.to_string())))
    }

    fn with_outcome(outcome: Result<SessionCredentials, SessionError>) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(outcome)),
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
            delay: Duration::ZERO,
        }
    }

    /// Sleep this long inside every refresh call.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the outcome of subsequent calls.
    pub fn set_outcome(&self, outcome: Result<SessionCredentials, SessionError>) {
        *self.outcome.lock() = outcome;
    }

    /// Number of refresh calls so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Refresh tokens received, in call order.
    #[must_use]
    pub fn received_tokens(&self) -> Vec<String> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl TokenRefresher for MockTokenRefresher {
    async fn refresh(&self, refresh_token: &str) -> Result<SessionCredentials, SessionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().push(refresh_token.to_string());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.outcome.lock().clone()
    }
}
