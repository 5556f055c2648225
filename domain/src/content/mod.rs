//! Generated post content.
//!
//! - [`entities::ContentDraft`]: caption + image description returned by the text backend
//! - [`entities::GeneratedContent`]: caption + rendered image file awaiting confirmation
//! - [`parsing`]: fence stripping and JSON parsing of backend responses
//! - [`prompt`]: the instruction sent to the text backend

pub mod entities;
pub mod parsing;
pub mod prompt;
