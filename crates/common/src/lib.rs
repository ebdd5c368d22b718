//! Modular common utilities shared across EventPass crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: field validation
//! - `runtime`: session credentials, token store and refresher seams
//! - `platform`: platform keychain token store
//! - `test-utils`: in-memory mocks for the runtime seams

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod validation;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod auth;

// Platform tier
// -------------------------------------------------------------------
#[cfg(feature = "platform")]
pub mod security;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", all(test, feature = "runtime")))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use auth::{
    MemoryTokenStore, SessionCredentials, SessionError, SessionManager, TokenRefresher, TokenStore,
};
#[cfg(feature = "platform")]
pub use security::{KeychainError, KeychainProvider};
#[cfg(feature = "foundation")]
pub use validation::{
    EmailValidator, FieldError, FieldValidator, StringValidator, ValidationError,
    ValidationResult, Validator,
};
