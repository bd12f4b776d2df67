//! Application context - dependency injection container

use std::sync::Arc;

use reservo_core::{BookingService, ConnectionService, PollSchedule, SessionService};
use reservo_domain::{Config, Result};
use reservo_infra::{BookingApi, FileSessionStore, SystemBrowser};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub sessions: SessionService,
    pub connection: ConnectionService,
    pub bookings: BookingService,
}

impl AppContext {
    /// Wire the services against the remote API and the local session file.
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(FileSessionStore::new(config.session.path.as_str()));
        let api = Arc::new(BookingApi::new(&config.api, store.clone())?);

        let sessions = SessionService::new(api.clone(), store)
            .with_ttl_days(config.session.ttl_days);
        let connection = ConnectionService::new(
            api.clone(),
            Arc::new(SystemBrowser),
            PollSchedule::from(&config.poll),
        );
        let bookings = BookingService::new(api);

        Ok(Self { config, sessions, connection, bookings })
    }
}
