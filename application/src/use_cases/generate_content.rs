//! Content generation use case
//!
//! Drafts a caption and image description with the text backend, then
//! renders the image with the image backend.

use crate::ports::generation::{GenerationError, ImageGenerator, TextGenerator};
use postpilot_domain::{CONTENT_SYSTEM_PROMPT, ContentDraft, parse_content_response};
use std::sync::Arc;
use tempfile::TempPath;
use tracing::{debug, error, info};

/// Calls the generative backends and validates their output
pub struct ContentGenerator {
    text: Arc<dyn TextGenerator>,
    image: Arc<dyn ImageGenerator>,
}

impl ContentGenerator {
    pub fn new(text: Arc<dyn TextGenerator>, image: Arc<dyn ImageGenerator>) -> Self {
        Self { text, image }
    }

    /// Ask the text backend for a caption and image description.
    ///
    /// Network errors, non-success statuses and unparseable replies all
    /// come back as `Err`; nothing here panics on backend output.
    pub async fn generate_content(&self, topic: &str) -> Result<ContentDraft, GenerationError> {
        let reply = match self.text.complete(CONTENT_SYSTEM_PROMPT, topic.trim()).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Content generation error: {}", e);
                return Err(e);
            }
        };
        debug!("Text backend replied with {} bytes", reply.len());

        match parse_content_response(&reply) {
            Ok(draft) => {
                info!("Generated caption ({} chars)", draft.caption.chars().count());
                Ok(draft)
            }
            Err(e) => {
                error!("Content generation error: {}", e);
                Err(GenerationError::MalformedResponse(e.to_string()))
            }
        }
    }

    /// Render `description` into a temporary image file owned by the caller.
    pub async fn generate_image(&self, description: &str) -> Result<TempPath, GenerationError> {
        match self.image.render(description).await {
            Ok(path) => {
                info!("Image written to {}", path.display());
                Ok(path)
            }
            Err(e) => {
                error!("Image generation error: {}", e);
                Err(e)
            }
        }
    }
}
