//! Testing utilities and helpers
//!
//! - **[`mocks`]**: in-memory implementations of the session seams with
//!   failure injection and call recording
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use eventpass_common::auth::{SessionCredentials, SessionManager};
//! use eventpass_common::testing::{MockTokenRefresher, MockTokenStore};
//!
//! let store = MockTokenStore::new();
//! let refresher = MockTokenRefresher::returning(SessionCredentials::new("a2", "r2"));
//! let session = SessionManager::new(Arc::new(store.clone()), Arc::new(refresher.clone()));
//! # let _ = session;
//! ```

pub mod mocks;

pub use mocks::{MockTokenRefresher, MockTokenStore};
