//! In-memory fakes of the ports, shared by the use case tests.

use crate::ports::account_client::{AccountClient, AccountError, MediaId, UserId};
use crate::ports::activity_log::{ActivityEvent, ActivityLogger};
use crate::ports::generation::{GenerationError, ImageGenerator, TextGenerator};
use crate::ports::progress::{ProgressNotifier, Step};
use crate::ports::session_store::{SessionStore, SessionStoreError};
use async_trait::async_trait;
use postpilot_domain::{Session, SettingsBlob};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::TempPath;

pub(crate) fn fake_settings() -> SettingsBlob {
    SettingsBlob::new(serde_json::json!({"cookies": {"sessionid": "fake-session"}}))
}

#[derive(Default)]
pub(crate) struct FakeAccountClient {
    pub login_fails: AtomicBool,
    pub probe_fails: AtomicBool,
    pub load_settings_fails: AtomicBool,
    pub action_fails: AtomicBool,
    pub logout_fails: AtomicBool,
    calls: Mutex<Vec<String>>,
    loaded_settings: Mutex<Option<SettingsBlob>>,
}

impl FakeAccountClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn loaded_settings(&self) -> Option<SettingsBlob> {
        self.loaded_settings.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn action_result(&self) -> Result<(), AccountError> {
        if self.action_fails.load(Ordering::SeqCst) {
            Err(AccountError::Transport("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AccountClient for FakeAccountClient {
    async fn login(&self, username: &str, _password: &str) -> Result<(), AccountError> {
        self.record(format!("login:{}", username));
        if self.login_fails.load(Ordering::SeqCst) {
            return Err(AccountError::Auth("bad password".to_string()));
        }
        Ok(())
    }

    async fn logout(&self) -> Result<(), AccountError> {
        self.record("logout");
        if self.logout_fails.load(Ordering::SeqCst) {
            return Err(AccountError::Transport("timeout".to_string()));
        }
        Ok(())
    }

    async fn dump_settings(&self) -> Result<SettingsBlob, AccountError> {
        Ok(fake_settings())
    }

    async fn load_settings(&self, settings: &SettingsBlob) -> Result<(), AccountError> {
        self.record("load_settings");
        if self.load_settings_fails.load(Ordering::SeqCst) {
            return Err(AccountError::Rejected("invalid settings".to_string()));
        }
        *self.loaded_settings.lock().unwrap() = Some(settings.clone());
        Ok(())
    }

    async fn timeline_feed(&self) -> Result<(), AccountError> {
        self.record("timeline");
        if self.probe_fails.load(Ordering::SeqCst) {
            return Err(AccountError::Auth("login_required".to_string()));
        }
        Ok(())
    }

    async fn user_id_from_username(&self, username: &str) -> Result<UserId, AccountError> {
        if username == "ghost" {
            return Err(AccountError::NotFound(format!("user {}", username)));
        }
        Ok(UserId(format!("id-{}", username)))
    }

    async fn media_id_from_url(&self, url: &str) -> Result<MediaId, AccountError> {
        if !url.starts_with("http") {
            return Err(AccountError::NotFound(format!("media at {}", url)));
        }
        Ok(MediaId("media-1".to_string()))
    }

    async fn upload_photo(&self, path: &Path, caption: &str) -> Result<(), AccountError> {
        self.record(format!("upload:{}:{}", path.exists(), caption));
        self.action_result()
    }

    async fn direct_send(&self, text: &str, recipients: &[UserId]) -> Result<(), AccountError> {
        let ids: Vec<String> = recipients.iter().map(ToString::to_string).collect();
        self.record(format!("dm:{}:{}", ids.join(","), text));
        self.action_result()
    }

    async fn media_like(&self, media: &MediaId) -> Result<(), AccountError> {
        self.record(format!("like:{}", media));
        self.action_result()
    }

    async fn media_comment(&self, media: &MediaId, text: &str) -> Result<(), AccountError> {
        self.record(format!("comment:{}:{}", media, text));
        self.action_result()
    }

    async fn user_follow(&self, user: &UserId) -> Result<(), AccountError> {
        self.record(format!("follow:{}", user));
        self.action_result()
    }

    async fn user_unfollow(&self, user: &UserId) -> Result<(), AccountError> {
        self.record(format!("unfollow:{}", user));
        self.action_result()
    }
}

#[derive(Default)]
pub(crate) struct MemorySessionStore {
    pub save_fails: AtomicBool,
    pub malformed: AtomicBool,
    stored: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        let store = Self::default();
        *store.stored.lock().unwrap() = Some(session);
        store
    }

    pub fn stored(&self) -> Option<Session> {
        self.stored.lock().unwrap().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if self.save_fails.load(Ordering::SeqCst) {
            return Err(SessionStoreError::Io {
                path: PathBuf::from("session.json"),
                source: std::io::Error::other("disk full"),
            });
        }
        *self.stored.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        if self.malformed.load(Ordering::SeqCst) {
            return Err(SessionStoreError::Malformed {
                path: PathBuf::from("session.json"),
                message: "expected value at line 1".to_string(),
            });
        }
        Ok(self.stored())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

/// Text backend returning a fixed reply, or failing when the reply is `None`
pub(crate) struct FakeTextGenerator {
    reply: Option<String>,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl FakeTextGenerator {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for FakeTextGenerator {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerationError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(GenerationError::RequestFailed(
                "connection refused".to_string(),
            )),
        }
    }
}

/// Image backend writing a few JPEG magic bytes to a temporary file
#[derive(Default)]
pub(crate) struct FakeImageGenerator {
    pub fails: AtomicBool,
    pub descriptions: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageGenerator for FakeImageGenerator {
    async fn render(&self, description: &str) -> Result<TempPath, GenerationError> {
        self.descriptions
            .lock()
            .unwrap()
            .push(description.to_string());
        if self.fails.load(Ordering::SeqCst) {
            return Err(GenerationError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile()?;
        file.write_all(b"\xFF\xD8\xFF\xE0")?;
        Ok(file.into_temp_path())
    }
}

#[derive(Default)]
pub(crate) struct RecordingActivityLogger {
    events: Mutex<Vec<String>>,
}

impl RecordingActivityLogger {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ActivityLogger for RecordingActivityLogger {
    fn log(&self, event: ActivityEvent) {
        self.events
            .lock()
            .unwrap()
            .push(event.event_type.to_string());
    }
}

#[derive(Default)]
pub(crate) struct RecordingProgress {
    steps: Mutex<Vec<(Step, Option<bool>)>>,
}

impl RecordingProgress {
    pub fn steps(&self) -> Vec<(Step, Option<bool>)> {
        self.steps.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_step_start(&self, step: &Step) {
        self.steps.lock().unwrap().push((step.clone(), None));
    }

    fn on_step_complete(&self, step: &Step, success: bool) {
        self.steps.lock().unwrap().push((step.clone(), Some(success)));
    }
}
