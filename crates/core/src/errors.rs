//! Errors returned by core flows

use eventpass_common::validation::ValidationError;
use eventpass_domain::EventPassError;
use thiserror::Error;

/// Failure of a flow that validates locally before calling a port
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlowError {
    /// Local input was rejected; no request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] EventPassError),
}

impl FlowError {
    /// Field errors, when the failure happened before any request.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Api(_) => None,
        }
    }
}

pub type FlowResult<T> = std::result::Result<T, FlowError>;
