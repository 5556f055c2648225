//! Session lifecycle use case
//!
//! Saves, restores and clears the persisted account session. Restoring
//! pushes the stored settings back into the account client and then runs a
//! liveness probe; a session that fails the probe is treated as expired.

use crate::ports::account_client::AccountClient;
use crate::ports::session_store::{SessionStore, SessionStoreError};
use postpilot_domain::{Session, SessionRecord, SettingsBlob};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Persists and restores the operator's account session
pub struct SessionLifecycle {
    client: Arc<dyn AccountClient>,
    store: Arc<dyn SessionStore>,
}

impl SessionLifecycle {
    pub fn new(client: Arc<dyn AccountClient>, store: Arc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    /// Persist a session built from the given parts and return it.
    pub fn save(
        &self,
        username: &str,
        logged_in: bool,
        settings: SettingsBlob,
    ) -> Result<Session, SessionStoreError> {
        let record = SessionRecord {
            username: username.to_string(),
            logged_in,
        };
        let session = Session::from_parts(record, settings);
        self.store.save(&session)?;
        info!("Session saved for {}", username);
        Ok(session)
    }

    /// Restore the stored session, if it is still alive.
    ///
    /// - `Ok(None)` when nothing is stored
    /// - `Ok(None)` when the backend rejects the restored settings or the
    ///   liveness probe fails; the stale files are removed
    /// - `Err` only when the stored data cannot be read or parsed
    pub async fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let Some(session) = self.store.load()? else {
            debug!("No stored session");
            return Ok(None);
        };

        if let Err(e) = self.client.load_settings(session.settings()).await {
            info!("Stored settings rejected by account backend: {}", e);
            self.discard_expired();
            return Ok(None);
        }

        match self.client.timeline_feed().await {
            Ok(()) => {
                info!("Session restored for {}", session.username());
                Ok(Some(session))
            }
            Err(e) => {
                info!("Saved session expired: {}", e);
                self.discard_expired();
                Ok(None)
            }
        }
    }

    /// Delete the stored session. Idempotent.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        self.store.clear()?;
        debug!("Stored session cleared");
        Ok(())
    }

    fn discard_expired(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Could not remove expired session files: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FakeAccountClient, MemorySessionStore, fake_settings};
    use std::sync::atomic::Ordering;

    fn lifecycle(
        client: &Arc<FakeAccountClient>,
        store: &Arc<MemorySessionStore>,
    ) -> SessionLifecycle {
        SessionLifecycle::new(client.clone(), store.clone())
    }

    #[tokio::test]
    async fn test_save_then_load_returns_equal_session() {
        let client = Arc::new(FakeAccountClient::new());
        let store = Arc::new(MemorySessionStore::new());
        let lifecycle = lifecycle(&client, &store);

        let saved = lifecycle.save("alice", true, fake_settings()).unwrap();
        let loaded = lifecycle.load().await.unwrap();

        assert_eq!(loaded, Some(saved));
        assert_eq!(client.loaded_settings(), Some(fake_settings()));
        assert_eq!(client.calls(), vec!["load_settings", "timeline"]);
    }

    #[tokio::test]
    async fn test_load_with_nothing_stored() {
        let client = Arc::new(FakeAccountClient::new());
        let store = Arc::new(MemorySessionStore::new());

        assert!(lifecycle(&client, &store).load().await.unwrap().is_none());
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_probe_expires_session_without_error() {
        let client = Arc::new(FakeAccountClient::new());
        client.probe_fails.store(true, Ordering::SeqCst);
        let store = Arc::new(MemorySessionStore::with_session(Session::new(
            "alice",
            fake_settings(),
        )));

        let loaded = lifecycle(&client, &store).load().await.unwrap();

        assert!(loaded.is_none());
        assert!(store.stored().is_none());
    }

    #[tokio::test]
    async fn test_rejected_settings_expire_session_without_probe() {
        let client = Arc::new(FakeAccountClient::new());
        client.load_settings_fails.store(true, Ordering::SeqCst);
        let store = Arc::new(MemorySessionStore::with_session(Session::new(
            "alice",
            fake_settings(),
        )));

        let loaded = lifecycle(&client, &store).load().await.unwrap();

        assert!(loaded.is_none());
        assert!(store.stored().is_none());
        assert_eq!(client.calls(), vec!["load_settings"]);
    }

    #[tokio::test]
    async fn test_malformed_store_is_an_error() {
        let client = Arc::new(FakeAccountClient::new());
        let store = Arc::new(MemorySessionStore::new());
        store.malformed.store(true, Ordering::SeqCst);

        let err = lifecycle(&client, &store).load().await.unwrap_err();
        assert!(matches!(err, SessionStoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_save_records_logged_out_flag() {
        let client = Arc::new(FakeAccountClient::new());
        let store = Arc::new(MemorySessionStore::new());

        let session = lifecycle(&client, &store)
            .save("alice", false, fake_settings())
            .unwrap();

        assert!(!session.is_logged_in());
        assert!(!store.stored().unwrap().is_logged_in());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let client = Arc::new(FakeAccountClient::new());
        let store = Arc::new(MemorySessionStore::with_session(Session::new(
            "alice",
            fake_settings(),
        )));
        let lifecycle = lifecycle(&client, &store);

        lifecycle.clear().unwrap();
        lifecycle.clear().unwrap();
        assert!(store.stored().is_none());
    }
}
