//! Configuration management

use serde::{Deserialize, Serialize};

use crate::impl_domain_string_conversions;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to (no trailing slash).
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Status code that triggers the refresh-and-retry cycle.
    #[serde(default = "default_unauthorized_status")]
    pub unauthorized_status: u16,
    /// Total transport attempts per dispatch (1 disables transport retries).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

const fn default_unauthorized_status() -> u16 {
    403
}

const fn default_max_attempts() -> usize {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 30,
            unauthorized_status: default_unauthorized_status(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Where session credentials are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map; credentials vanish on exit.
    #[default]
    Memory,
    /// Platform keychain (macOS Keychain, Windows Credential Manager,
    /// Secret Service).
    Keychain,
}

impl_domain_string_conversions!(StorageBackend {
    Memory => "memory",
    Keychain => "keychain",
});

/// Credential storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Keychain service name entries are namespaced under.
    pub service_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: StorageBackend::Memory, service_name: "EventPass.session".to_string() }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
