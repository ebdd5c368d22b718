//! Integration tests for the session manager
//!
//! Covers refresh coalescing under concurrency, which unit tests cannot
//! reach with a single caller.

use std::sync::Arc;
use std::time::Duration;

use eventpass_common::auth::{
    SessionCredentials, SessionManager, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
use eventpass_common::testing::{MockTokenRefresher, MockTokenStore};

fn logged_in_store() -> MockTokenStore {
    MockTokenStore::with_entries([(ACCESS_TOKEN_KEY, "stale"), (REFRESH_TOKEN_KEY, "r1")])
}

#[tokio::test]
async fn concurrent_refreshes_for_same_stale_token_call_refresher_once() {
    let store = logged_in_store();
    let refresher = MockTokenRefresher::returning(SessionCredentials::new("fresh", "r2"))
        .with_delay(Duration::from_millis(50));
    let session =
        Arc::new(SessionManager::new(Arc::new(store.clone()), Arc::new(refresher.clone())));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.refresh_after(Some("stale")).await })
        })
        .collect();

    for handle in handles {
        let token = handle.await.unwrap().unwrap();
        assert_eq!(token, "fresh");
    }

    assert_eq!(refresher.call_count(), 1);
    assert_eq!(store.value(REFRESH_TOKEN_KEY).as_deref(), Some("r2"));
}

#[tokio::test]
async fn refresh_of_new_token_after_rotation_calls_refresher_again() {
    let store = logged_in_store();
    let refresher = MockTokenRefresher::returning(SessionCredentials::new("fresh", "r2"));
    let session = SessionManager::new(Arc::new(store.clone()), Arc::new(refresher.clone()));

    session.refresh_after(Some("stale")).await.unwrap();
    refresher.set_outcome(Ok(SessionCredentials::new("fresher", "r3")));
    let token = session.refresh_after(Some("fresh")).await.unwrap();

    assert_eq!(token, "fresher");
    assert_eq!(refresher.call_count(), 2);
    assert_eq!(refresher.received_tokens(), vec!["r1".to_string(), "r2".to_string()]);
}

#[tokio::test]
async fn concurrent_failures_clear_once_and_all_callers_fail() {
    let store = logged_in_store();
    let refresher = MockTokenRefresher::failing("revoked").with_delay(Duration::from_millis(20));
    let session =
        Arc::new(SessionManager::new(Arc::new(store.clone()), Arc::new(refresher.clone())));

    let (a, b) = tokio::join!(session.refresh_after(Some("stale")), session.refresh_after(Some("stale")));

    assert!(a.is_err());
    assert!(b.is_err());
    // The second caller finds no refresh token left and fails without a call.
    assert_eq!(refresher.call_count(), 1);
    assert!(store.is_empty());
}
