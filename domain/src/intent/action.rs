//! Action value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an intent asks the bot to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Draft a post (caption + image) for operator review
    Post,
    /// Send a direct message
    Message,
    /// Like a post by URL
    Like,
    /// Comment on a post by URL
    Comment,
    /// Follow a user
    Follow,
    /// Unfollow a user
    Unfollow,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Post => "post",
            Action::Message => "message",
            Action::Like => "like",
            Action::Comment => "comment",
            Action::Follow => "follow",
            Action::Unfollow => "unfollow",
        }
    }

    /// Parameter keys an intent of this action must carry
    pub fn required_parameters(&self) -> &'static [&'static str] {
        use super::entities::params;
        match self {
            Action::Post => &[params::CAPTION, params::IMAGE_PROMPT],
            Action::Message => &[params::USERNAME, params::MESSAGE],
            Action::Like => &[params::POST_URL],
            Action::Comment => &[params::COMMENT_TEXT, params::POST_URL],
            Action::Follow | Action::Unfollow => &[params::USERNAME],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
