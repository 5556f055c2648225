//! Domain error types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing parameter '{parameter}' for action '{action}'")]
    MissingParameter {
        action: &'static str,
        parameter: &'static str,
    },

    #[error("Malformed content response: {0}")]
    MalformedContent(String),
}

impl DomainError {
    /// Which failure bucket this error falls into
    pub fn kind(&self) -> FailureKind {
        match self {
            DomainError::MissingParameter { .. } => FailureKind::Command,
            DomainError::MalformedContent(_) => FailureKind::Generation,
        }
    }
}

/// Failure taxonomy shared by every layer.
///
/// Every failure ends the current action; none of them is retried
/// automatically. The presentation layer turns the kind into a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport or authentication failure from the account backend
    Account,
    /// Malformed or unreachable generative backend
    Generation,
    /// Unrecognized or malformed operator command
    Command,
    /// Local file I/O (session files, temporary images)
    Filesystem,
    /// An account action was attempted without an active session
    NotLoggedIn,
    /// Publish or cancel was requested with no draft pending
    NoPendingContent,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Account => "account",
            FailureKind::Generation => "generation",
            FailureKind::Command => "command",
            FailureKind::Filesystem => "filesystem",
            FailureKind::NotLoggedIn => "not_logged_in",
            FailureKind::NoPendingContent => "no_pending_content",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
