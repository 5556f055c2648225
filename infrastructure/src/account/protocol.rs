//! Request and response bodies of the account bridge.

use serde::{Deserialize, Serialize};

/// Header carrying the bridge session id on authenticated calls
pub const SESSION_HEADER: &str = "X-Session-Id";

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

/// Platform ids come back as strings or as bare numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Text(String),
    Number(u64),
}

impl IdValue {
    pub fn into_string(self) -> String {
        match self {
            IdValue::Text(s) => s,
            IdValue::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserIdResponse {
    pub user_id: IdValue,
}

#[derive(Debug, Deserialize)]
pub struct MediaIdResponse {
    pub media_id: IdValue,
}

#[derive(Debug, Serialize)]
pub struct DirectSendRequest<'a> {
    pub text: &'a str,
    pub user_ids: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct CommentRequest<'a> {
    pub text: &'a str,
}
