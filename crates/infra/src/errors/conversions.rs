//! Conversions from external infrastructure errors into domain errors.

use eventpass_common::auth::SessionError;
use eventpass_domain::EventPassError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub EventPassError);

impl From<InfraError> for EventPassError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<EventPassError> for InfraError {
    fn from(value: EventPassError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoEventPassError {
    fn into_eventpass(self) -> EventPassError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → EventPassError */
/* -------------------------------------------------------------------------- */

impl IntoEventPassError for HttpError {
    fn into_eventpass(self) -> EventPassError {
        if self.is_timeout() {
            return EventPassError::Transport("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return EventPassError::Transport("HTTP connection failure".into());
        }

        if self.is_decode() {
            return EventPassError::Serialization(format!("invalid response body: {self}"));
        }

        if self.is_builder() {
            return EventPassError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message = status.canonical_reason().unwrap_or("unknown status").to_string();
            return EventPassError::http(code, message);
        }

        EventPassError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_eventpass())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → EventPassError */
/* -------------------------------------------------------------------------- */

impl IntoEventPassError for JsonError {
    fn into_eventpass(self) -> EventPassError {
        EventPassError::Serialization(self.to_string())
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_eventpass())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → EventPassError */
/* -------------------------------------------------------------------------- */

impl IntoEventPassError for UrlError {
    fn into_eventpass(self) -> EventPassError {
        EventPassError::Config(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_eventpass())
    }
}

/* -------------------------------------------------------------------------- */
/* SessionError → EventPassError */
/* -------------------------------------------------------------------------- */

impl IntoEventPassError for SessionError {
    fn into_eventpass(self) -> EventPassError {
        match self {
            SessionError::Storage(msg) => EventPassError::Storage(msg),
            SessionError::NoRefreshToken => {
                EventPassError::Unauthorized("no refresh token stored".into())
            }
            SessionError::RefreshFailed(msg) => EventPassError::Unauthorized(msg),
        }
    }
}

impl From<SessionError> for InfraError {
    fn from(value: SessionError) -> Self {
        InfraError(value.into_eventpass())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
