//! Session domain entities

use serde::{Deserialize, Serialize};

/// Opaque client settings (cookies, device ids) dumped by the account backend.
///
/// The bot never inspects the contents; it only stores and restores them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsBlob(serde_json::Value);

impl SettingsBlob {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

}

/// Metadata document persisted alongside the settings blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    #[serde(default)]
    pub logged_in: bool,
}

/// An authenticated account session (Entity)
///
/// Created on successful login and persisted immediately. There is at most
/// one per operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    username: String,
    logged_in: bool,
    settings: SettingsBlob,
}

impl Session {
    pub fn new(username: impl Into<String>, settings: SettingsBlob) -> Self {
        Self {
            username: username.into(),
            logged_in: true,
            settings,
        }
    }

    pub fn from_parts(record: SessionRecord, settings: SettingsBlob) -> Self {
        Self {
            username: record.username,
            logged_in: record.logged_in,
            settings,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn settings(&self) -> &SettingsBlob {
        &self.settings
    }

    pub fn record(&self) -> SessionRecord {
        SessionRecord {
            username: self.username.clone(),
            logged_in: self.logged_in,
        }
    }
}
