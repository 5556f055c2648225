//! Content entities

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tempfile::TempPath;

/// Caption and image description produced by the text backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDraft {
    pub caption: String,
    pub image_prompt: String,
}

/// A generated post waiting for the operator to publish or cancel it.
///
/// Owns the temporary image file: the file is removed when the content is
/// published, discarded, or simply dropped, so a `GeneratedContent` can never
/// point at a file that is already gone.
#[derive(Debug)]
pub struct GeneratedContent {
    caption: String,
    image: TempPath,
}

impl GeneratedContent {
    pub fn new(caption: impl Into<String>, image: TempPath) -> Self {
        Self {
            caption: caption.into(),
            image,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn image_path(&self) -> &Path {
        &self.image
    }

    /// Remove the image file now and report whether removal succeeded.
    pub fn discard(self) -> io::Result<()> {
        self.image.close()
    }
}
