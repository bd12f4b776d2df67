//! Session service - login, logout, and session reads

use std::sync::Arc;

use chrono::Utc;
use reservo_domain::constants::{HOME_PATH, SESSION_TTL_DAYS};
use reservo_domain::{ReservoError, Result, SessionRecord};
use tracing::info;

use super::ports::{AuthGateway, SessionStore};

/// Session service
///
/// Owns the login/logout flows and the authoritative read of "is there a
/// usable session". An expired record is treated as absent and purged on
/// read.
pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn SessionStore>,
    ttl_days: i64,
}

impl SessionService {
    /// Create a new session service with the default 7-day session TTL.
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn SessionStore>) -> Self {
        Self { gateway, store, ttl_days: SESSION_TTL_DAYS }
    }

    /// Override the session TTL. Mostly useful in tests.
    pub fn with_ttl_days(mut self, ttl_days: i64) -> Self {
        self.ttl_days = ttl_days;
        self
    }

    /// Exchange a Google-issued identity token for a service session.
    ///
    /// A missing identity token is a non-fatal "try again" condition, caught
    /// before any network call.
    pub async fn login(&self, id_token: &str) -> Result<SessionRecord> {
        let id_token = id_token.trim();
        if id_token.is_empty() {
            return Err(ReservoError::InvalidInput(
                "no identity token received; try again".to_string(),
            ));
        }

        let token = self.gateway.login_google(id_token).await?;
        let record = SessionRecord::issue_with_ttl(token, Utc::now(), self.ttl_days);
        self.store.set(record.clone()).await?;

        info!(expires_at = %record.expires_at, "session established");
        Ok(record)
    }

    /// Destroy the local session. The remote service keeps no session state
    /// to invalidate.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear().await?;
        info!("session cleared");
        Ok(())
    }

    /// Current session token, if an unexpired record exists. Expired records
    /// are purged here.
    pub async fn token(&self) -> Result<Option<String>> {
        match self.store.get().await? {
            Some(record) if record.is_expired(Utc::now()) => {
                self.store.clear().await?;
                Ok(None)
            }
            Some(record) => Ok(Some(record.token)),
            None => Ok(None),
        }
    }

    /// Whether an unexpired session is present.
    pub async fn is_authed(&self) -> Result<bool> {
        Ok(self.token().await?.is_some())
    }

    /// Where to send the user after a successful login: the decoded `from`
    /// parameter the guard attached, or home.
    pub fn return_destination(from: Option<&str>) -> String {
        match from {
            Some(raw) if !raw.is_empty() => match urlencoding::decode(raw) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => HOME_PATH.to_string(),
            },
            _ => HOME_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Duration;

    use super::*;

    struct StubAuthGateway {
        calls: Mutex<Vec<String>>,
        granted: String,
    }

    impl StubAuthGateway {
        fn granting(token: &str) -> Self {
            Self { calls: Mutex::new(Vec::new()), granted: token.to_string() }
        }
    }

    #[async_trait]
    impl AuthGateway for StubAuthGateway {
        async fn login_google(&self, id_token: &str) -> Result<String> {
            self.calls.lock().expect("lock").push(id_token.to_string());
            Ok(self.granted.clone())
        }
    }

    #[derive(Default)]
    struct MemorySessionStore {
        record: Mutex<Option<SessionRecord>>,
    }

    #[async_trait]
    impl SessionStore for MemorySessionStore {
        async fn get(&self) -> Result<Option<SessionRecord>> {
            Ok(self.record.lock().expect("lock").clone())
        }

        async fn set(&self, record: SessionRecord) -> Result<()> {
            *self.record.lock().expect("lock") = Some(record);
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.record.lock().expect("lock") = None;
            Ok(())
        }
    }

    fn service_with(
        gateway: Arc<StubAuthGateway>,
        store: Arc<MemorySessionStore>,
    ) -> SessionService {
        SessionService::new(gateway, store)
    }

    #[tokio::test]
    async fn login_stores_granted_token() {
        let gateway = Arc::new(StubAuthGateway::granting("session-token"));
        let store = Arc::new(MemorySessionStore::default());
        let service = service_with(gateway.clone(), store.clone());

        let record = service.login("google-id-token").await.expect("login succeeds");

        assert_eq!(record.token, "session-token");
        assert_eq!(gateway.calls.lock().expect("lock").as_slice(), ["google-id-token"]);
        assert_eq!(service.token().await.expect("readable"), Some("session-token".to_string()));
    }

    #[tokio::test]
    async fn empty_id_token_fails_before_any_network_call() {
        let gateway = Arc::new(StubAuthGateway::granting("unused"));
        let store = Arc::new(MemorySessionStore::default());
        let service = service_with(gateway.clone(), store);

        let err = service.login("   ").await.expect_err("must be rejected");

        assert!(matches!(err, ReservoError::InvalidInput(_)));
        assert!(gateway.calls.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn expired_record_reads_as_absent_and_is_purged() {
        let gateway = Arc::new(StubAuthGateway::granting("unused"));
        let store = Arc::new(MemorySessionStore::default());
        let service = service_with(gateway, store.clone());

        let stale = SessionRecord::issue("old".to_string(), Utc::now() - Duration::days(8));
        store.set(stale).await.expect("seeded");

        assert_eq!(service.token().await.expect("readable"), None);
        assert!(store.get().await.expect("readable").is_none(), "expired record purged");
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let gateway = Arc::new(StubAuthGateway::granting("session-token"));
        let store = Arc::new(MemorySessionStore::default());
        let service = service_with(gateway, store.clone());

        service.login("google-id-token").await.expect("login succeeds");
        service.logout().await.expect("logout succeeds");

        assert!(store.get().await.expect("readable").is_none());
        assert!(!service.is_authed().await.expect("readable"));
    }

    #[test]
    fn return_destination_decodes_from_parameter() {
        assert_eq!(
            SessionService::return_destination(Some("%2Fbookings%3Fview%3Dweek")),
            "/bookings?view=week"
        );
        assert_eq!(SessionService::return_destination(Some("/calendar")), "/calendar");
        assert_eq!(SessionService::return_destination(Some("")), "/");
        assert_eq!(SessionService::return_destination(None), "/");
    }
}
