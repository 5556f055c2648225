//! Account adapter use case
//!
//! One method per supported account action. Each resolves human-readable
//! identifiers (username → user id, post URL → media id) before calling the
//! backend, and converts every backend failure into a logged [`BotError`].

use super::error::BotError;
use super::session_lifecycle::SessionLifecycle;
use crate::ports::account_client::{AccountClient, AccountError};
use crate::ports::activity_log::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::session_store::SessionStore;
use postpilot_domain::{Action, Session};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// How a successful login was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginKind {
    /// A stored session passed the liveness probe
    Restored,
    /// A fresh network login was performed
    Fresh,
}

/// Thin pass-through to the account backend
pub struct AccountAdapter {
    client: Arc<dyn AccountClient>,
    sessions: SessionLifecycle,
    activity: Arc<dyn ActivityLogger>,
}

impl AccountAdapter {
    pub fn new(client: Arc<dyn AccountClient>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            sessions: SessionLifecycle::new(client.clone(), store),
            client,
            activity: Arc::new(NoActivityLogger),
        }
    }

    /// Record every completed account action in the given journal
    pub fn with_activity_logger(mut self, activity: Arc<dyn ActivityLogger>) -> Self {
        self.activity = activity;
        self
    }

    pub fn sessions(&self) -> &SessionLifecycle {
        &self.sessions
    }

    /// Log in, reusing the stored session when it is still alive.
    ///
    /// A stored session for a different username is ignored. A stored
    /// session that cannot be read is logged and replaced by a fresh login.
    /// Failing to persist a fresh session does not fail the login; the next
    /// run simply logs in again.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(Session, LoginKind), BotError> {
        match self.sessions.load().await {
            Ok(Some(session)) if session.username() == username => {
                info!("Logged in as {} using saved session", username);
                self.journal("login", json!({"username": username, "restored": true}));
                return Ok((session, LoginKind::Restored));
            }
            Ok(Some(session)) => {
                info!(
                    "Saved session belongs to {}, logging in as {}",
                    session.username(),
                    username
                );
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring unreadable saved session: {}", e),
        }

        if let Err(e) = self.client.login(username, password).await {
            error!("Login failed for {}: {}", username, e);
            return Err(e.into());
        }

        let settings = match self.client.dump_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                error!("Could not export client settings after login: {}", e);
                return Err(e.into());
            }
        };

        let session = match self.sessions.save(username, true, settings.clone()) {
            Ok(session) => session,
            Err(e) => {
                warn!("Failed to save session: {}", e);
                Session::new(username, settings)
            }
        };

        info!("Logged in as {}", username);
        self.journal("login", json!({"username": username, "restored": false}));
        Ok((session, LoginKind::Fresh))
    }

    /// Invalidate the remote session and clear the stored one.
    ///
    /// Local files are removed even when the remote logout fails, so a
    /// broken backend cannot leave credentials behind.
    pub async fn logout(&self) -> Result<(), BotError> {
        let remote = self.client.logout().await;
        let local = self.sessions.clear();

        if let Err(e) = remote {
            error!("Logout error: {}", e);
            return Err(e.into());
        }
        if let Err(e) = local {
            error!("Could not remove stored session: {}", e);
            return Err(e.into());
        }

        info!("Logged out successfully");
        self.journal("logout", json!({}));
        Ok(())
    }

    pub async fn post_photo(&self, path: &Path, caption: &str) -> Result<(), BotError> {
        if let Err(e) = self.client.upload_photo(path, caption).await {
            error!("Error uploading photo {}: {}", path.display(), e);
            return Err(e.into());
        }
        info!("Photo published");
        self.journal("post_published", json!({"caption": caption}));
        Ok(())
    }

    pub async fn send_direct_message(&self, username: &str, text: &str) -> Result<(), BotError> {
        let result = async {
            let user = self.client.user_id_from_username(username).await?;
            self.client.direct_send(text, &[user]).await
        }
        .await;

        self.finish(Action::Message, username, result)
    }

    pub async fn like_post(&self, post_url: &str) -> Result<(), BotError> {
        let result = async {
            let media = self.client.media_id_from_url(post_url).await?;
            self.client.media_like(&media).await
        }
        .await;

        self.finish(Action::Like, post_url, result)
    }

    pub async fn comment_on_post(&self, post_url: &str, text: &str) -> Result<(), BotError> {
        let result = async {
            let media = self.client.media_id_from_url(post_url).await?;
            self.client.media_comment(&media, text).await
        }
        .await;

        self.finish(Action::Comment, post_url, result)
    }

    pub async fn follow_user(&self, username: &str) -> Result<(), BotError> {
        let result = async {
            let user = self.client.user_id_from_username(username).await?;
            self.client.user_follow(&user).await
        }
        .await;

        self.finish(Action::Follow, username, result)
    }

    pub async fn unfollow_user(&self, username: &str) -> Result<(), BotError> {
        let result = async {
            let user = self.client.user_id_from_username(username).await?;
            self.client.user_unfollow(&user).await
        }
        .await;

        self.finish(Action::Unfollow, username, result)
    }

    fn finish(
        &self,
        action: Action,
        target: &str,
        result: Result<(), AccountError>,
    ) -> Result<(), BotError> {
        match result {
            Ok(()) => {
                info!("{} succeeded for {}", action, target);
                self.journal("action", json!({"action": action, "target": target}));
                Ok(())
            }
            Err(e) => {
                error!("{} failed for {}: {}", action, target, e);
                Err(e.into())
            }
        }
    }

    fn journal(&self, event_type: &'static str, payload: serde_json::Value) {
        self.activity.log(ActivityEvent::new(event_type, payload));
    }
}
