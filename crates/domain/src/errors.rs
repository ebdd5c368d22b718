//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for EventPass
///
/// Every failure the client core can hand to a presentation layer. None of
/// them is fatal: the caller recovers by retrying, re-entering data, or
/// routing the user back to login.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum EventPassError {
    /// No response was received (connection refused, DNS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The session is no longer valid; stored credentials were cleared.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The server answered with a non-2xx status other than the
    /// unauthorized one.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Login refused because the account email is not verified yet.
    #[error("Email not verified: {0}")]
    EmailNotVerified(String),

    /// Local input rejected before any request was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The request was cancelled by its owner before completing.
    #[error("Request cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EventPassError {
    /// Build an HTTP error from a status code and message.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http { status, message: message.into() }
    }

    /// HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the caller must route the user back to an unauthenticated
    /// screen.
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Result type alias for EventPass operations
pub type Result<T> = std::result::Result<T, EventPassError>;
