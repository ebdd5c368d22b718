//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Read `.env` from the working directory, if present
//! 2. Load from environment variables when the base URL is set
//! 3. Otherwise probe the standard paths for a config file
//! 4. Otherwise use the built-in defaults
//!
//! ## Environment Variables
//! - `EVENTPASS_API_URL` (or `API_URL`): API base URL, required for env
//!   loading
//! - `EVENTPASS_API_TIMEOUT`: request timeout in seconds
//! - `EVENTPASS_UNAUTHORIZED_STATUS`: status that triggers a token refresh
//! - `EVENTPASS_MAX_ATTEMPTS`: transport attempts per request
//! - `EVENTPASS_STORAGE_BACKEND`: `memory` or `keychain`
//! - `EVENTPASS_SERVICE_NAME`: keychain service name
//! - `EVENTPASS_LOG_LEVEL`: default log filter
//! - `EVENTPASS_LOG_JSON`: JSON log lines (true/false)
//!
//! ## File Locations
//! `eventpass.{toml,json}` then `config.{toml,json}`, looked up in the
//! working directory, its two parents, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use eventpass_domain::{
    ApiConfig, Config, EventPassError, LoggingConfig, Result, StorageBackend, StorageConfig,
};

const FILE_NAMES: [&str; 4] = ["eventpass.toml", "eventpass.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `EventPassError::Config` if a present source is malformed. A
/// missing source is not an error.
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }

    if base_url_from_env().is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::warn!("No configuration found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Only the base URL is required; every other value falls back to its
/// default.
///
/// # Errors
/// Returns `EventPassError::Config` if the base URL is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let base_url = base_url_from_env().ok_or_else(|| {
        EventPassError::Config(
            "Missing required environment variable: EVENTPASS_API_URL".to_string(),
        )
    })?;

    let api_defaults = ApiConfig::default();
    let storage_defaults = StorageConfig::default();
    let logging_defaults = LoggingConfig::default();

    let backend = match std::env::var("EVENTPASS_STORAGE_BACKEND") {
        Ok(value) => StorageBackend::from_str(&value)
            .map_err(|e| EventPassError::Config(format!("Invalid storage backend: {e}")))?,
        Err(_) => storage_defaults.backend,
    };

    Ok(Config {
        api: ApiConfig {
            base_url,
            timeout_seconds: env_parse("EVENTPASS_API_TIMEOUT", api_defaults.timeout_seconds)?,
            unauthorized_status: env_parse(
                "EVENTPASS_UNAUTHORIZED_STATUS",
                api_defaults.unauthorized_status,
            )?,
            max_attempts: env_parse("EVENTPASS_MAX_ATTEMPTS", api_defaults.max_attempts)?,
        },
        storage: StorageConfig {
            backend,
            service_name: std::env::var("EVENTPASS_SERVICE_NAME")
                .unwrap_or(storage_defaults.service_name),
        },
        logging: LoggingConfig {
            level: std::env::var("EVENTPASS_LOG_LEVEL").unwrap_or(logging_defaults.level),
            json: env_bool("EVENTPASS_LOG_JSON", logging_defaults.json),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is picked by
/// extension.
///
/// # Errors
/// Returns `EventPassError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(EventPassError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            EventPassError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EventPassError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EventPassError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EventPassError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(EventPassError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
        dirs.push(cwd.join("../.."));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn base_url_from_env() -> Option<String> {
    std::env::var("EVENTPASS_API_URL")
        .or_else(|_| std::env::var("API_URL"))
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Parse an optional environment variable, falling back to `default`.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| EventPassError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
