//! Port interfaces for the calendar connection flow

use async_trait::async_trait;
use reservo_domain::{ConnectionStatus, Result};

/// Trait for the remote calendar-link endpoints
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// Fresh read of the connection state. Never cached.
    async fn status(&self) -> Result<ConnectionStatus>;

    /// Ask the service for the provider authorization URL to open.
    async fn connect_url(&self) -> Result<String>;

    /// Sever the link. On success the account is immediately disconnected;
    /// no re-poll is needed.
    async fn disconnect(&self) -> Result<()>;
}

/// Trait for handing an authorization URL to a separate browsing context
///
/// Fire-and-forget: the opened context cannot be read back programmatically,
/// which is why the connect flow polls for its outcome.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}
