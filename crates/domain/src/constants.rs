//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Session constants
pub const SESSION_COOKIE_NAME: &str = "auth";
pub const SESSION_TTL_DAYS: i64 = 7;

// Routing constants
pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const FROM_PARAM: &str = "from";

/// Path prefixes that bypass session gating entirely (static assets).
pub const ASSET_PREFIXES: &[&str] = &["/_next/", "/favicon.ico", "/images/", "/fonts/"];

// Connection polling configuration
pub const DEFAULT_POLL_ATTEMPTS: u32 = 7;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1500;
/// Attempt index from which the poll delay starts growing.
pub const POLL_BACKOFF_AFTER_ATTEMPT: u32 = 3;
/// Per-attempt delay increment once backoff kicks in.
pub const POLL_BACKOFF_STEP_MS: u64 = 250;

// Booking form configuration
pub const DURATION_CHOICES_MIN: &[u32] = &[15, 30, 45, 60, 90, 120];
pub const DEFAULT_DURATION_MIN: u32 = 60;
/// Start times default to the next quarter-hour boundary.
pub const START_TIME_STEP_MIN: u32 = 15;
