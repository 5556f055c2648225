//! Bot orchestrator use case
//!
//! Composes the account adapter and the content generator. All per-operator
//! state lives in an [`OperatorState`] owned by the caller and passed into
//! every call; the orchestrator itself holds no mutable state.

use super::account::{AccountAdapter, LoginKind};
use super::error::BotError;
use super::generate_content::ContentGenerator;
use crate::ports::activity_log::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier, Step};
use postpilot_domain::{Action, GeneratedContent, Intent, OperatorState, classify, params};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A session was already active for this operator
    AlreadyLoggedIn(String),
    /// A stored session was restored
    Restored(String),
    /// A fresh network login was performed
    LoggedIn(String),
}

/// Result of a successfully executed intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// An account action ran against `target` (username or post URL)
    Completed { action: Action, target: String },
    /// A post draft was generated and is now pending in the operator state
    Drafted,
}

/// What was published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPost {
    pub caption: String,
}

/// Coordinates classification, content generation and account actions
pub struct BotOrchestrator {
    account: AccountAdapter,
    content: ContentGenerator,
    progress: Arc<dyn ProgressNotifier>,
    activity: Arc<dyn ActivityLogger>,
}

impl BotOrchestrator {
    pub fn new(account: AccountAdapter, content: ContentGenerator) -> Self {
        Self {
            account,
            content,
            progress: Arc::new(NoProgress),
            activity: Arc::new(NoActivityLogger),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_activity_logger(mut self, activity: Arc<dyn ActivityLogger>) -> Self {
        self.activity = activity;
        self
    }

    // ==================== Session ====================

    /// Restore a stored, still-valid session into `state` (e.g. at startup).
    ///
    /// Returns the restored username, or `None` when nothing usable is stored.
    pub async fn restore(&self, state: &mut OperatorState) -> Result<Option<String>, BotError> {
        let restored = self
            .step(Step::RestoreSession, self.account.sessions().load())
            .await?;

        Ok(restored.map(|session| {
            let username = session.username().to_string();
            state.set_session(session);
            username
        }))
    }

    pub async fn login(
        &self,
        state: &mut OperatorState,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, BotError> {
        if let Some(current) = state.username().filter(|_| state.is_logged_in()) {
            return Ok(LoginOutcome::AlreadyLoggedIn(current.to_string()));
        }

        let (session, kind) = self
            .step(Step::Login, self.account.login(username, password))
            .await?;
        let username = session.username().to_string();
        state.set_session(session);

        Ok(match kind {
            LoginKind::Restored => LoginOutcome::Restored(username),
            LoginKind::Fresh => LoginOutcome::LoggedIn(username),
        })
    }

    /// Log out and forget the session and any pending draft.
    ///
    /// The operator state is cleared even when the backend call fails.
    pub async fn logout(&self, state: &mut OperatorState) -> Result<(), BotError> {
        if !state.is_logged_in() {
            return Err(BotError::NotLoggedIn);
        }

        let result = self.step(Step::Logout, self.account.logout()).await;
        state.clear_session();
        if let Some(content) = state.take_pending() {
            Self::remove_image(content);
        }
        result
    }

    // ==================== Content ====================

    /// Generate a caption and image for `topic` without publishing.
    ///
    /// Returns early on the first failing step. The returned content owns
    /// its temporary image; publishing is a separate, explicit call.
    pub async fn create_post(&self, topic: &str) -> Result<GeneratedContent, BotError> {
        let draft = self
            .step(Step::GenerateCaption, self.content.generate_content(topic))
            .await?;

        let image = self
            .step(
                Step::RenderImage,
                self.content.generate_image(&draft.image_prompt),
            )
            .await?;

        Ok(GeneratedContent::new(draft.caption, image))
    }

    /// Generate content for `topic` and keep it as the pending draft.
    ///
    /// A previous draft is replaced and its image removed.
    pub async fn draft_post<'s>(
        &self,
        state: &'s mut OperatorState,
        topic: &str,
    ) -> Result<&'s GeneratedContent, BotError> {
        if !state.is_logged_in() {
            return Err(BotError::NotLoggedIn);
        }

        let content = self.create_post(topic).await?;
        self.activity.log(ActivityEvent::new(
            "draft_created",
            json!({"topic": topic, "caption": content.caption()}),
        ));
        state.set_pending(content);
        state.pending().ok_or(BotError::NoPendingContent)
    }

    /// Publish the pending draft.
    ///
    /// The draft is consumed whatever the outcome: its image file is
    /// removed after a successful upload and after a failed one.
    pub async fn publish_pending(
        &self,
        state: &mut OperatorState,
    ) -> Result<PublishedPost, BotError> {
        if !state.is_logged_in() {
            return Err(BotError::NotLoggedIn);
        }
        let content = state.take_pending().ok_or(BotError::NoPendingContent)?;

        let result = self
            .step(
                Step::Publish,
                self.account
                    .post_photo(content.image_path(), content.caption()),
            )
            .await;

        let caption = content.caption().to_string();
        Self::remove_image(content);
        result.map(|()| PublishedPost { caption })
    }

    /// Discard the pending draft and remove its image file.
    pub fn cancel_pending(&self, state: &mut OperatorState) -> Result<(), BotError> {
        let content = state.take_pending().ok_or(BotError::NoPendingContent)?;
        let caption = content.caption().to_string();
        content.discard().map_err(BotError::Cleanup)?;

        info!("Post cancelled");
        self.activity.log(ActivityEvent::new(
            "draft_discarded",
            json!({"caption": caption}),
        ));
        Ok(())
    }

    // ==================== Intents ====================

    /// Classify a free-text command and execute it.
    pub async fn execute_command(
        &self,
        state: &mut OperatorState,
        command: &str,
    ) -> Result<IntentOutcome, BotError> {
        info!("Processing command: {}", command);
        match classify(command) {
            Some(intent) => self.execute_intent(state, &intent).await,
            None => {
                warn!("Unknown command type: {}", command);
                Err(BotError::UnrecognizedCommand(command.trim().to_string()))
            }
        }
    }

    /// Execute a classified or explicitly built intent.
    pub async fn execute_intent(
        &self,
        state: &mut OperatorState,
        intent: &Intent,
    ) -> Result<IntentOutcome, BotError> {
        intent.validate()?;
        if !state.is_logged_in() {
            return Err(BotError::NotLoggedIn);
        }

        let action = intent.action;
        if action == Action::Post {
            let topic = intent.require(params::CAPTION)?;
            self.draft_post(state, topic).await?;
            return Ok(IntentOutcome::Drafted);
        }

        let target = match action {
            Action::Like | Action::Comment => intent.require(params::POST_URL)?,
            _ => intent.require(params::USERNAME)?,
        }
        .to_string();

        // Parameters were checked by `validate` above
        let text = |key| intent.param(key).unwrap_or_default();
        let run = async {
            match action {
                Action::Message => {
                    self.account
                        .send_direct_message(&target, text(params::MESSAGE))
                        .await
                }
                Action::Like => self.account.like_post(&target).await,
                Action::Comment => {
                    self.account
                        .comment_on_post(&target, text(params::COMMENT_TEXT))
                        .await
                }
                Action::Follow => self.account.follow_user(&target).await,
                Action::Unfollow => self.account.unfollow_user(&target).await,
                Action::Post => Ok(()),
            }
        };
        self.step(Step::AccountAction(action), run).await?;

        Ok(IntentOutcome::Completed { action, target })
    }

    // ==================== Helpers ====================

    async fn step<T, E>(&self, step: Step, work: impl Future<Output = Result<T, E>>) -> Result<T, E> {
        self.progress.on_step_start(&step);
        let result = work.await;
        self.progress.on_step_complete(&step, result.is_ok());
        result
    }

    fn remove_image(content: GeneratedContent) {
        let path = content.image_path().to_path_buf();
        if let Err(e) = content.discard() {
            warn!("Could not remove generated image {}: {}", path.display(), e);
        }
    }
}
