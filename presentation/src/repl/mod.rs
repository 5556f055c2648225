//! Interactive operator console
//!
//! Provides a readline-based REPL over the bot orchestrator.

mod bot_repl;
mod command;
mod input;

pub use bot_repl::BotRepl;
pub use command::ReplCommand;
