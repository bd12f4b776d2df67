//! Route gating decisions
//!
//! Pure policy: given the requested path, its raw query string, and whether a
//! session token is present, decide whether navigation proceeds or redirects.
//! No clock, no network, no environment access.

use reservo_domain::constants::{ASSET_PREFIXES, FROM_PARAM, HOME_PATH, LOGIN_PATH};
use serde::Serialize;

/// Outcome of a route gating decision.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouteDecision {
    /// Serve the requested path unchanged.
    Allow,
    /// No session present: send the user to the login page, remembering where
    /// they were headed so login can return them there.
    RedirectToLogin { from: String },
    /// Already authenticated on the login page: send home.
    RedirectToHome,
}

impl RouteDecision {
    /// Redirect target path, or `None` for [`RouteDecision::Allow`].
    ///
    /// The `from` parameter value is percent-encoded here, at the edge where
    /// the decision becomes a concrete location.
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin { from } => {
                Some(format!("{LOGIN_PATH}?{FROM_PARAM}={}", urlencoding::encode(from)))
            }
            Self::RedirectToHome => Some(HOME_PATH.to_string()),
        }
    }
}

/// Decide what to do with a navigation request.
///
/// `query` is the raw query string without its leading `?`; pass an empty
/// string when the request has none. Runs on every navigable path; asset
/// paths always pass through.
pub fn decide(path: &str, query: &str, has_token: bool) -> RouteDecision {
    if is_asset(path) {
        return RouteDecision::Allow;
    }

    if !has_token && path != LOGIN_PATH {
        let from =
            if query.is_empty() { path.to_string() } else { format!("{path}?{query}") };
        return RouteDecision::RedirectToLogin { from };
    }

    if has_token && path == LOGIN_PATH {
        return RouteDecision::RedirectToHome;
    }

    RouteDecision::Allow
}

fn is_asset(path: &str) -> bool {
    ASSET_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}
