//! Generative backend ports
//!
//! Defines the text-generation and image-generation backends used to
//! draft post content.

use async_trait::async_trait;
use postpilot_domain::FailureKind;
use tempfile::TempPath;
use thiserror::Error;

/// Errors that can occur when calling a generative backend
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Could not write image file: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GenerationError::Io(_) => FailureKind::Filesystem,
            _ => FailureKind::Generation,
        }
    }
}

/// Hosted text-generation (chat completion) backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a system instruction plus a user turn and return the reply text
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
    -> Result<String, GenerationError>;
}

/// Hosted image-generation backend
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Render `description` and write the image to a fresh temporary file.
    ///
    /// The returned [`TempPath`] owns the file; dropping it deletes the file.
    async fn render(&self, description: &str) -> Result<TempPath, GenerationError>;
}
