//! Session credential management
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ SessionManager  │  owns accessToken / refreshToken
//! └────────┬────────┘
//!          │
//!          ├──► TokenStore      (MemoryTokenStore, KeychainProvider)
//!          │
//!          └──► TokenRefresher  (HTTP implementation lives in infra)
//! ```
//!
//! # Usage Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use eventpass_common::auth::{
//!     MemoryTokenStore, SessionCredentials, SessionError, SessionManager, TokenRefresher,
//! };
//!
//! struct Refresher;
//!
//! #[async_trait::async_trait]
//! impl TokenRefresher for Refresher {
//!     async fn refresh(&self, _token: &str) -> Result<SessionCredentials, SessionError> {
//!         Err(SessionError::RefreshFailed("offline".into()))
//!     }
//! }
//!
//! # async fn example() -> Result<(), SessionError> {
//! let session = SessionManager::new(Arc::new(MemoryTokenStore::new()), Arc::new(Refresher));
//! session.store(&SessionCredentials::new("access", "refresh")).await?;
//! assert!(session.is_authenticated().await?);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "platform")]
mod keychain;
pub mod memory;
pub mod session;
pub mod traits;
pub mod types;

pub use memory::MemoryTokenStore;
pub use session::{SessionError, SessionManager};
pub use traits::{TokenRefresher, TokenStore};
pub use types::{SessionCredentials, ACCESS_TOKEN_KEY, LEGACY_TOKEN_KEY, REFRESH_TOKEN_KEY};
