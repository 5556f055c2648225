//! HTTP client for the account bridge

use super::protocol::{
    CommentRequest, DirectSendRequest, LoginRequest, MediaIdResponse, SESSION_HEADER,
    SessionResponse, UserIdResponse,
};
use async_trait::async_trait;
use postpilot_application::ports::account_client::{AccountClient, AccountError, MediaId, UserId};
use postpilot_domain::SettingsBlob;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

/// [`AccountClient`] that forwards every call to the account bridge.
///
/// The bridge session id is held in memory; it is obtained by `login` or
/// `load_settings` and attached to every other call.
pub struct HttpAccountClient {
    http: reqwest::Client,
    base_url: Url,
    session_id: RwLock<Option<String>>,
}

impl HttpAccountClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, AccountError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AccountError::Transport(format!("Invalid bridge URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AccountError::Transport(format!(
                "Invalid bridge URL '{}'",
                base_url
            )));
        }

        Ok(Self {
            http,
            base_url,
            session_id: RwLock::new(None),
        })
    }

    /// Current bridge session id, if any
    pub async fn session_id(&self) -> Option<String> {
        self.session_id.read().await.clone()
    }

    /// Build `base/<segments...>`; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn authed(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, AccountError> {
        let session = self
            .session_id
            .read()
            .await
            .clone()
            .ok_or(AccountError::NotLoggedIn)?;
        Ok(self
            .http
            .request(method, self.endpoint(segments))
            .header(SESSION_HEADER, session))
    }

    async fn send(request: RequestBuilder) -> Result<Response, AccountError> {
        let response = request
            .send()
            .await
            .map_err(|e| AccountError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, AccountError> {
        response
            .json::<T>()
            .await
            .map_err(|e| AccountError::UnexpectedResponse(e.to_string()))
    }

    async fn post_action(&self, segments: &[&str]) -> Result<(), AccountError> {
        Self::send(self.authed(Method::POST, segments).await?).await?;
        Ok(())
    }
}

fn status_error(status: StatusCode, body: &str) -> AccountError {
    let body = body.trim();
    let detail = if body.is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status.as_u16(), body)
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AccountError::Auth(detail),
        StatusCode::NOT_FOUND => AccountError::NotFound(detail),
        _ => AccountError::Rejected(detail),
    }
}

#[async_trait]
impl AccountClient for HttpAccountClient {
    async fn login(&self, username: &str, password: &str) -> Result<(), AccountError> {
        let request = self
            .http
            .post(self.endpoint(&["auth", "login"]))
            .json(&LoginRequest { username, password });
        let body: SessionResponse = Self::parse(Self::send(request).await?).await?;

        *self.session_id.write().await = Some(body.session_id);
        info!("Bridge session opened for {}", username);
        Ok(())
    }

    async fn logout(&self) -> Result<(), AccountError> {
        // The local session is dropped whatever the bridge answers
        let Some(session) = self.session_id.write().await.take() else {
            return Err(AccountError::NotLoggedIn);
        };
        let request = self
            .http
            .post(self.endpoint(&["auth", "logout"]))
            .header(SESSION_HEADER, session);
        Self::send(request).await?;
        Ok(())
    }

    async fn dump_settings(&self) -> Result<SettingsBlob, AccountError> {
        let request = self.authed(Method::GET, &["auth", "settings"]).await?;
        let value: serde_json::Value = Self::parse(Self::send(request).await?).await?;
        Ok(SettingsBlob::new(value))
    }

    async fn load_settings(&self, settings: &SettingsBlob) -> Result<(), AccountError> {
        let request = self
            .http
            .post(self.endpoint(&["auth", "settings"]))
            .json(settings.as_value());
        let body: SessionResponse = Self::parse(Self::send(request).await?).await?;

        *self.session_id.write().await = Some(body.session_id);
        debug!("Bridge session restored from settings");
        Ok(())
    }

    async fn timeline_feed(&self) -> Result<(), AccountError> {
        let request = self.authed(Method::GET, &["feed", "timeline"]).await?;
        Self::send(request).await?;
        Ok(())
    }

    async fn user_id_from_username(&self, username: &str) -> Result<UserId, AccountError> {
        let request = self
            .authed(Method::GET, &["user", "id"])
            .await?
            .query(&[("username", username)]);
        let body: UserIdResponse = Self::parse(Self::send(request).await?).await?;
        Ok(UserId(body.user_id.into_string()))
    }

    async fn media_id_from_url(&self, url: &str) -> Result<MediaId, AccountError> {
        let request = self
            .authed(Method::GET, &["media", "id"])
            .await?
            .query(&[("url", url)]);
        let body: MediaIdResponse = Self::parse(Self::send(request).await?).await?;
        Ok(MediaId(body.media_id.into_string()))
    }

    async fn upload_photo(&self, path: &Path, caption: &str) -> Result<(), AccountError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AccountError::Transport(format!("Could not read {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo.jpg".to_string());

        let form = reqwest::multipart::Form::new()
            .text("caption", caption.to_string())
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            );

        let request = self
            .authed(Method::POST, &["photo", "upload"])
            .await?
            .multipart(form);
        Self::send(request).await?;
        Ok(())
    }

    async fn direct_send(&self, text: &str, recipients: &[UserId]) -> Result<(), AccountError> {
        let body = DirectSendRequest {
            text,
            user_ids: recipients.iter().map(|id| id.0.as_str()).collect(),
        };
        let request = self
            .authed(Method::POST, &["direct", "send"])
            .await?
            .json(&body);
        Self::send(request).await?;
        Ok(())
    }

    async fn media_like(&self, media: &MediaId) -> Result<(), AccountError> {
        self.post_action(&["media", media.0.as_str(), "like"]).await
    }

    async fn media_comment(&self, media: &MediaId, text: &str) -> Result<(), AccountError> {
        let request = self
            .authed(Method::POST, &["media", media.0.as_str(), "comment"])
            .await?
            .json(&CommentRequest { text });
        Self::send(request).await?;
        Ok(())
    }

    async fn user_follow(&self, user: &UserId) -> Result<(), AccountError> {
        self.post_action(&["user", user.0.as_str(), "follow"]).await
    }

    async fn user_unfollow(&self, user: &UserId) -> Result<(), AccountError> {
        self.post_action(&["user", user.0.as_str(), "unfollow"]).await
    }
}
