//! Account client port
//!
//! Defines the interface to the account-automation backend, which owns the
//! social platform's private protocol. The bot only forwards calls to it.

use async_trait::async_trait;
use postpilot_domain::{FailureKind, SettingsBlob};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during account backend operations
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rejected by account backend: {0}")]
    Rejected(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Not logged in")]
    NotLoggedIn,
}

impl AccountError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AccountError::NotLoggedIn => FailureKind::NotLoggedIn,
            _ => FailureKind::Account,
        }
    }
}

/// Numeric user id resolved from a username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

/// Media id resolved from a post URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client for the account-automation backend
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AccountClient: Send + Sync {
    /// Fresh network login
    async fn login(&self, username: &str, password: &str) -> Result<(), AccountError>;

    /// Invalidate the remote session
    async fn logout(&self) -> Result<(), AccountError>;

    /// Export the client settings (cookies, device ids) for persistence
    async fn dump_settings(&self) -> Result<SettingsBlob, AccountError>;

    /// Restore previously exported client settings
    async fn load_settings(&self, settings: &SettingsBlob) -> Result<(), AccountError>;

    /// Cheap authenticated call used as a liveness probe
    async fn timeline_feed(&self) -> Result<(), AccountError>;

    async fn user_id_from_username(&self, username: &str) -> Result<UserId, AccountError>;

    async fn media_id_from_url(&self, url: &str) -> Result<MediaId, AccountError>;

    async fn upload_photo(&self, path: &Path, caption: &str) -> Result<(), AccountError>;

    async fn direct_send(&self, text: &str, recipients: &[UserId]) -> Result<(), AccountError>;

    async fn media_like(&self, media: &MediaId) -> Result<(), AccountError>;

    async fn media_comment(&self, media: &MediaId, text: &str) -> Result<(), AccountError>;

    async fn user_follow(&self, user: &UserId) -> Result<(), AccountError>;

    async fn user_unfollow(&self, user: &UserId) -> Result<(), AccountError>;
}
