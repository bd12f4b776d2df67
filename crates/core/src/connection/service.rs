//! Calendar connection service - connect flow, status polling, disconnect

use std::sync::Arc;

use reservo_domain::{ConnectionStatus, ReservoError, Result};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use super::poll::PollSchedule;
use super::ports::{CalendarGateway, UrlOpener};

/// Result of a connect flow.
///
/// Exhausting the poll budget is inconclusive, not an error: the external
/// authorization may still complete, and the user can re-check manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A poll confirmed the account is linked.
    Connected,
    /// Attempt budget exhausted without confirmation.
    StillWaiting,
    /// The caller cancelled between attempts; no further request was issued.
    Cancelled,
}

/// Calendar connection service
pub struct ConnectionService {
    gateway: Arc<dyn CalendarGateway>,
    opener: Arc<dyn UrlOpener>,
    schedule: PollSchedule,
}

impl ConnectionService {
    pub fn new(
        gateway: Arc<dyn CalendarGateway>,
        opener: Arc<dyn UrlOpener>,
        schedule: PollSchedule,
    ) -> Self {
        Self { gateway, opener, schedule }
    }

    /// Single fresh read of the connection state.
    pub async fn status(&self) -> Result<ConnectionStatus> {
        self.gateway.status().await
    }

    /// Run the connect flow: fetch the authorization URL, hand it to the
    /// opener, then poll until connected, exhausted, or cancelled.
    ///
    /// Re-authorization (switching accounts while already connected) is the
    /// same flow; the remote service decides what the consent screen shows.
    pub async fn connect(&self, cancel: &CancellationToken) -> Result<ConnectOutcome> {
        let raw = self.gateway.connect_url().await?;
        let authorize_url = Url::parse(&raw)
            .map_err(|e| ReservoError::Api(format!("invalid authorization URL: {e}")))?;
        if !matches!(authorize_url.scheme(), "http" | "https") {
            return Err(ReservoError::Api(format!(
                "refusing to open authorization URL with scheme {}",
                authorize_url.scheme()
            )));
        }

        self.opener.open(authorize_url.as_str())?;
        info!("authorization page opened, polling for connection");

        Ok(self.poll_until_connected(cancel).await)
    }

    /// Poll the status endpoint until it reports connected, the attempt
    /// budget runs out, or the caller cancels.
    ///
    /// Cancellation is cooperative: the token is checked before every poll
    /// and interrupts every wait. An in-flight status request begun just
    /// before cancellation may still complete; its result is discarded with
    /// the rest of the loop state. A failed read counts as a not-connected
    /// attempt rather than aborting the sequence.
    async fn poll_until_connected(&self, cancel: &CancellationToken) -> ConnectOutcome {
        for attempt in 0..self.schedule.attempts {
            if cancel.is_cancelled() {
                debug!(attempt, "connection poll cancelled");
                return ConnectOutcome::Cancelled;
            }

            match self.gateway.status().await {
                Ok(status) if status.connected => {
                    info!(attempt, "calendar connected");
                    return ConnectOutcome::Connected;
                }
                Ok(_) => debug!(attempt, "not connected yet"),
                Err(err) => {
                    warn!(attempt, error = %err, "status check failed during poll");
                }
            }

            if attempt + 1 < self.schedule.attempts {
                let delay = self.schedule.delay_after(attempt);
                tokio::select! {
                    () = cancel.cancelled() => {
                        debug!(attempt, "connection poll cancelled during wait");
                        return ConnectOutcome::Cancelled;
                    }
                    () = sleep(delay) => {}
                }
            }
        }

        debug!(attempts = self.schedule.attempts, "poll budget exhausted");
        ConnectOutcome::StillWaiting
    }

    /// Sever the calendar link. Success means immediately disconnected.
    pub async fn disconnect(&self) -> Result<()> {
        self.gateway.disconnect().await?;
        info!("calendar disconnected");
        Ok(())
    }
}
