//! # EventPass Domain
//!
//! Business domain types and models for the EventPass client.
//!
//! This crate contains:
//! - API payload types (auth, profile, events, tickets)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Endpoint paths and validation limits
//!
//! ## Architecture
//! - No dependencies on other EventPass crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
