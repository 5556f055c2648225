//! Session store port
//!
//! Raw persistence of the session metadata and the client settings blob.
//! Restoring a session into the account client and probing it is the job
//! of [`SessionLifecycle`](crate::use_cases::session_lifecycle::SessionLifecycle).

use postpilot_domain::{FailureKind, Session};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing stored sessions
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("Session file I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed session data in {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}

impl SessionStoreError {
    pub fn kind(&self) -> FailureKind {
        FailureKind::Filesystem
    }
}

/// Durable storage for one operator's session.
pub trait SessionStore: Send + Sync {
    /// Persist the session metadata and its settings blob
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Read back a stored session.
    ///
    /// Returns `Ok(None)` when either backing file is absent; errors only
    /// on unreadable or malformed data.
    fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    /// Delete the stored session. Succeeds when nothing is stored.
    fn clear(&self) -> Result<(), SessionStoreError>;
}
