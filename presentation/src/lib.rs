//! Presentation layer for postpilot
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive operator console.

pub mod cli;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use repl::{BotRepl, ReplCommand};
