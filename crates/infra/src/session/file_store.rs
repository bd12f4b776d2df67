//! File-backed session store
//!
//! The non-web counterpart of the `auth` cookie: a single JSON record holding
//! the token, its absolute expiry, and the cookie metadata the web deployment
//! carries. Expiry policy lives in the session service; this store only
//! persists what it is given.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use reservo_core::SessionStore;
use reservo_domain::{ReservoError, Result, SessionRecord};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Stores the session record as a JSON file.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self) -> Result<Option<SessionRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(InfraError::from(err).into()),
        };

        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                // A corrupt record is unrecoverable; drop it and start over.
                warn!(path = %self.path.display(), error = %err, "discarding corrupt session record");
                self.clear().await?;
                Ok(None)
            }
        }
    }

    async fn set(&self, record: SessionRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(InfraError::from)?;
            }
        }

        let body = serde_json::to_string_pretty(&record)
            .map_err(|e| ReservoError::Internal(format!("session record not serializable: {e}")))?;
        std::fs::write(&self.path, body).map_err(InfraError::from)?;
        debug!(path = %self.path.display(), "session record written");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}
