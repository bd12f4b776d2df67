//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS, SESSION_TTL_DAYS};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub poll: PollConfig,
}

/// Remote booking API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote booking service (e.g. `https://api.example.com`).
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Local session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the session record file. Relative paths resolve against the
    /// current working directory.
    pub path: String,
    pub ttl_days: i64,
}

/// Connection status polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    pub attempts: u32,
    pub interval_ms: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { path: ".reservo-session.json".to_string(), ttl_days: SESSION_TTL_DAYS }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { attempts: DEFAULT_POLL_ATTEMPTS, interval_ms: DEFAULT_POLL_INTERVAL_MS }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:4000".to_string(),
                timeout_seconds: default_timeout_seconds(),
            },
            session: SessionConfig::default(),
            poll: PollConfig::default(),
        }
    }
}
