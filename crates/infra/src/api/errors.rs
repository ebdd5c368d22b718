//! API error classification
//!
//! Maps [`EventPassError`] onto categories the presentation layer acts on,
//! plus a user-facing message.

use eventpass_domain::EventPassError;

/// Generic message for failures the user can only retry later.
pub const TRY_AGAIN_LATER: &str = "Something went wrong. Please try again later.";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Session gone - route to login
    Authentication,
    /// Rate limiting errors (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx) and rejected local input
    Client,
    /// Network/connection errors
    Network,
    /// Configuration, storage and internal errors
    Config,
    /// Cancelled by the caller
    Cancelled,
}

/// Classification helpers for [`EventPassError`]
pub trait ApiErrorExt {
    fn category(&self) -> ApiErrorCategory;

    /// Text to show the user.
    fn user_message(&self) -> String;
}

impl ApiErrorExt for EventPassError {
    fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthorized(_) => ApiErrorCategory::Authentication,
            Self::Http { status: 429, .. } => ApiErrorCategory::RateLimit,
            Self::Http { status, .. } if *status >= 500 => ApiErrorCategory::Server,
            Self::Http { .. } | Self::EmailNotVerified(_) | Self::InvalidInput(_) => {
                ApiErrorCategory::Client
            }
            Self::Transport(_) => ApiErrorCategory::Network,
            Self::Cancelled => ApiErrorCategory::Cancelled,
            Self::Config(_) | Self::Storage(_) | Self::Serialization(_) | Self::Internal(_) => {
                ApiErrorCategory::Config
            }
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. }
            | Self::EmailNotVerified(message)
            | Self::InvalidInput(message) => message.clone(),
            Self::Unauthorized(_) => SESSION_EXPIRED.to_string(),
            _ => TRY_AGAIN_LATER.to_string(),
        }
    }
}
