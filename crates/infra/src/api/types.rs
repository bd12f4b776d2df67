//! Wire types for the remote booking service

use serde::{Deserialize, Serialize};

/// Login request: the Google-issued identity token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GoogleLoginRequest<'a> {
    pub id_token: &'a str,
}

/// Login response: the opaque session token the service grants.
#[derive(Debug, Deserialize)]
pub(super) struct TokenGrant {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct StatusBody {
    pub connected: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConnectBody {
    pub url: String,
}

/// Error body the service returns on non-2xx responses.
///
/// `message` is a string for single errors and an array for validation
/// errors; both shapes surface to the user.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub message: ErrorMessage,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    /// Single messages verbatim; arrays joined the way the service's web
    /// client shows them.
    pub(super) fn join(self) -> String {
        match self {
            Self::One(message) => message,
            Self::Many(messages) => messages.join(", "),
        }
    }
}
