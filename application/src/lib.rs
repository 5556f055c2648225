//! Application layer for postpilot
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    account_client::{AccountClient, AccountError, MediaId, UserId},
    activity_log::{ActivityEvent, ActivityLogger, NoActivityLogger},
    generation::{GenerationError, ImageGenerator, TextGenerator},
    progress::{NoProgress, ProgressNotifier, Step},
    session_store::{SessionStore, SessionStoreError},
};
pub use use_cases::account::{AccountAdapter, LoginKind};
pub use use_cases::error::BotError;
pub use use_cases::generate_content::ContentGenerator;
pub use use_cases::orchestrator::{BotOrchestrator, IntentOutcome, LoginOutcome, PublishedPost};
pub use use_cases::session_lifecycle::SessionLifecycle;
