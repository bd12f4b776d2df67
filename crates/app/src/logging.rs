//! Structured logging helpers for command execution.

use std::time::Duration;

use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` is the logical identifier (e.g. `"bookings::create"`), never
/// user-supplied values.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}
