//! Intent entity

use super::action::Action;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameter keys carried by intents
pub mod params {
    pub const USERNAME: &str = "username";
    pub const MESSAGE: &str = "message";
    pub const CAPTION: &str = "caption";
    pub const IMAGE_PROMPT: &str = "image_prompt";
    pub const POST_URL: &str = "post_url";
    pub const COMMENT_TEXT: &str = "comment_text";
}

/// A structured request built from one operator input.
///
/// Intents are ephemeral: built once, consumed once by the orchestrator,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub action: Action,
    pub parameters: BTreeMap<String, String>,
}

impl Intent {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }

    pub fn post(caption: impl Into<String>, image_prompt: impl Into<String>) -> Self {
        Self::new(Action::Post)
            .with_param(params::CAPTION, caption)
            .with_param(params::IMAGE_PROMPT, image_prompt)
    }

    pub fn message(username: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Action::Message)
            .with_param(params::USERNAME, username)
            .with_param(params::MESSAGE, message)
    }

    pub fn like(post_url: impl Into<String>) -> Self {
        Self::new(Action::Like).with_param(params::POST_URL, post_url)
    }

    pub fn comment(comment_text: impl Into<String>, post_url: impl Into<String>) -> Self {
        Self::new(Action::Comment)
            .with_param(params::COMMENT_TEXT, comment_text)
            .with_param(params::POST_URL, post_url)
    }

    pub fn follow(username: impl Into<String>) -> Self {
        Self::new(Action::Follow).with_param(params::USERNAME, username)
    }

    pub fn unfollow(username: impl Into<String>) -> Self {
        Self::new(Action::Unfollow).with_param(params::USERNAME, username)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Get a parameter the action cannot run without
    pub fn require(&self, key: &'static str) -> Result<&str, DomainError> {
        match self.param(key) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(DomainError::MissingParameter {
                action: self.action.as_str(),
                parameter: key,
            }),
        }
    }

    /// Check that every parameter the action needs is present and non-empty
    pub fn validate(&self) -> Result<(), DomainError> {
        for key in self.action.required_parameters() {
            self.require(key)?;
        }
        Ok(())
    }
}
