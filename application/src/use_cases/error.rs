//! Errors surfaced by the bot use cases

use crate::ports::account_client::AccountError;
use crate::ports::generation::GenerationError;
use crate::ports::session_store::SessionStoreError;
use postpilot_domain::{DomainError, FailureKind};
use thiserror::Error;

/// A failed operator action.
///
/// Every variant is terminal for the current action; the operator decides
/// whether to retry. [`BotError::kind`] maps each variant onto the shared
/// [`FailureKind`] taxonomy.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    #[error("Session storage error: {0}")]
    SessionStore(#[from] SessionStoreError),

    #[error("Content generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Invalid command: {0}")]
    InvalidCommand(#[from] DomainError),

    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("No generated content is pending")]
    NoPendingContent,

    #[error("Could not remove generated image: {0}")]
    Cleanup(std::io::Error),
}

impl BotError {
    pub fn kind(&self) -> FailureKind {
        match self {
            BotError::Account(e) => e.kind(),
            BotError::SessionStore(e) => e.kind(),
            BotError::Generation(e) => e.kind(),
            BotError::InvalidCommand(e) => e.kind(),
            BotError::UnrecognizedCommand(_) => FailureKind::Command,
            BotError::NotLoggedIn => FailureKind::NotLoggedIn,
            BotError::NoPendingContent => FailureKind::NoPendingContent,
            BotError::Cleanup(_) => FailureKind::Filesystem,
        }
    }
}
