//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the API URL is not set, falls back to loading from file
//! 3. Probes a handful of paths for config files
//! 4. Supports TOML and JSON formats
//!
//! ## Environment Variables
//! - `RESERVO_API_URL`: Base URL of the remote booking service (required for
//!   the environment path)
//! - `RESERVO_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `RESERVO_SESSION_PATH`: Session record file path
//! - `RESERVO_SESSION_TTL_DAYS`: Session lifetime in days
//! - `RESERVO_POLL_ATTEMPTS`: Connection poll attempt budget
//! - `RESERVO_POLL_INTERVAL_MS`: Base interval between polls
//!
//! ## File Locations
//! The loader probes (in order): `./config.toml`, `./config.json`,
//! `./reservo.toml`, `./reservo.json`, then the same names in the parent
//! directory.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use reservo_domain::{ApiConfig, Config, PollConfig, ReservoError, Result, SessionConfig};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ReservoError::Config` if configuration cannot be loaded from
/// either source, or if a value fails to parse.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `RESERVO_API_URL` must be present; everything else falls back to its
/// default.
///
/// # Errors
/// Returns `ReservoError::Config` if the API URL is missing or any present
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let base_url = std::env::var("RESERVO_API_URL")
        .map_err(|_| ReservoError::Config("RESERVO_API_URL is not set".to_string()))?;

    let defaults = Config::default();

    Ok(Config {
        api: ApiConfig {
            base_url,
            timeout_seconds: env_parsed(
                "RESERVO_API_TIMEOUT_SECS",
                defaults.api.timeout_seconds,
            )?,
        },
        session: SessionConfig {
            path: std::env::var("RESERVO_SESSION_PATH").unwrap_or(defaults.session.path),
            ttl_days: env_parsed("RESERVO_SESSION_TTL_DAYS", defaults.session.ttl_days)?,
        },
        poll: PollConfig {
            attempts: env_parsed("RESERVO_POLL_ATTEMPTS", defaults.poll.attempts)?,
            interval_ms: env_parsed("RESERVO_POLL_INTERVAL_MS", defaults.poll.interval_ms)?,
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected by
/// file extension (`.toml` or `.json`).
///
/// # Errors
/// Returns `ReservoError::Config` if no file is found, the format is
/// unsupported, or the contents fail to parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ReservoError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ReservoError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ReservoError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(contents)
            .map_err(|e| ReservoError::Config(format!("Invalid TOML config: {e}"))),
        Some("json") => serde_json::from_str(contents)
            .map_err(|e| ReservoError::Config(format!("Invalid JSON config: {e}"))),
        other => Err(ReservoError::Config(format!(
            "Unsupported config format: {}",
            other.unwrap_or("none")
        ))),
    }
}

fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config.toml", "config.json", "reservo.toml", "reservo.json"];
    let bases = [PathBuf::from("."), PathBuf::from("..")];

    for base in &bases {
        for name in &names {
            let candidate = base.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_parsed<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| ReservoError::Config(format!("Invalid {name}: {e}"))),
        Err(_) => Ok(default),
    }
}
