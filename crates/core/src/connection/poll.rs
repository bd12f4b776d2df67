//! Wait scheduling between connection status polls

use std::time::Duration;

use reservo_domain::config::PollConfig;
use reservo_domain::constants::{
    DEFAULT_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS, POLL_BACKOFF_AFTER_ATTEMPT,
    POLL_BACKOFF_STEP_MS,
};

/// Wait schedule for the connection poller.
///
/// Fixed interval for the first attempts, then a lightly increasing delay to
/// tolerate slow external authorization completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub attempts: u32,
    pub interval: Duration,
}

impl PollSchedule {
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self { attempts, interval }
    }

    /// Delay to wait after the given zero-based attempt before the next one.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        if attempt >= POLL_BACKOFF_AFTER_ATTEMPT {
            self.interval + Duration::from_millis(POLL_BACKOFF_STEP_MS * u64::from(attempt))
        } else {
            self.interval
        }
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_POLL_ATTEMPTS,
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl From<&PollConfig> for PollSchedule {
    fn from(config: &PollConfig) -> Self {
        Self::new(config.attempts, Duration::from_millis(config.interval_ms))
    }
}
