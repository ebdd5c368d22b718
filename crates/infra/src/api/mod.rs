//! Backend API access
//!
//! # Architecture
//!
//! - `client`: bearer token attachment and the single refresh-and-retry
//!   cycle, on top of the retrying [`HttpClient`](crate::http::HttpClient)
//! - `auth`, `profile`, `events`, `organization`, `tickets`: port
//!   implementations for `eventpass-core`
//! - `media`: image and landing page URLs
//! - `errors`: classification of failures for the presentation layer

pub mod auth;
pub mod client;
pub mod errors;
pub mod events;
pub mod media;
pub mod organization;
pub mod profile;
pub mod tickets;

pub use auth::{AuthService, HttpTokenRefresher};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig, ApiRequest, ApiResponse};
pub use errors::{ApiErrorCategory, ApiErrorExt};
pub use events::EventApi;
pub use media::MediaUrls;
pub use organization::OrganizationApi;
pub use profile::ProfileApi;
pub use tickets::TicketApi;
