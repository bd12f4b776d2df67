//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Reservo
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ReservoError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReservoError {
    /// Stable label for the error kind, suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Api(_) => "api",
            Self::Auth(_) => "auth",
            Self::Config(_) => "config",
            Self::Session(_) => "session",
            Self::Platform(_) => "platform",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Reservo operations
pub type Result<T> = std::result::Result<T, ReservoError>;
