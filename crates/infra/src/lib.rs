//! # EventPass Infrastructure
//!
//! Infrastructure implementations of the `eventpass-core` ports.
//!
//! This crate contains:
//! - The retrying reqwest [`HttpClient`](http::HttpClient)
//! - The authenticated [`ApiClient`](api::ApiClient) with session refresh
//! - Typed services for accounts, profiles, events and tickets
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `eventpass-core`
//! - Depends on `eventpass-common`, `eventpass-domain` and `eventpass-core`
//! - Contains all "impure" code (network, keychain, files, environment)

pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod http;
pub mod observability;

pub use api::*;
pub use context::AppContext;
pub use errors::InfraError;
pub use http::*;
pub use observability::init_logging;
