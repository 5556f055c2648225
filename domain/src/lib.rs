//! Domain layer for postpilot
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Intent**: a structured request (`post`, `message`, `like`, `comment`,
//!   `follow`, `unfollow`) classified from one operator sentence
//! - **Session**: the authenticated account state persisted between runs
//! - **GeneratedContent**: a caption plus a temporary image awaiting the
//!   operator's publish/cancel decision
//! - **OperatorState**: the explicit per-operator state threaded through the
//!   orchestrator instead of a UI-global store

pub mod content;
pub mod core;
pub mod intent;
pub mod operator;
pub mod session;

// Re-export commonly used types
pub use content::{
    entities::{ContentDraft, GeneratedContent},
    parsing::{parse_content_response, strip_code_fence},
    prompt::CONTENT_SYSTEM_PROMPT,
};
pub use core::error::{DomainError, FailureKind};
pub use intent::{
    action::Action,
    classifier::classify,
    entities::{Intent, params},
};
pub use operator::state::{OperatorState, SessionHandle};
pub use session::entities::{Session, SessionRecord, SettingsBlob};
