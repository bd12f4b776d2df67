//! Port interfaces for session management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use reservo_domain::{Result, SessionRecord};

/// Trait for exchanging a provider identity token for a service session token
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Submit the Google-issued ID token to the remote service and return the
    /// opaque session token it grants.
    async fn login_google(&self, id_token: &str) -> Result<String>;
}

/// Trait for persisting the single local session record
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored record, expired or not. Expiry policy lives in the
    /// session service, not the store.
    async fn get(&self) -> Result<Option<SessionRecord>>;

    /// Replace the stored record.
    async fn set(&self, record: SessionRecord) -> Result<()>;

    /// Remove the stored record. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<()>;
}
