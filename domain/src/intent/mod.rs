//! Operator intents.
//!
//! - [`action::Action`]: the closed set of things the bot can do
//! - [`entities::Intent`]: an action plus its captured parameters
//! - [`classifier::classify`]: ordered keyword rules turning free text into an intent

pub mod action;
pub mod classifier;
pub mod entities;
