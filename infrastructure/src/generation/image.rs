//! Image generation over a prompt-in-URL HTTP service

use async_trait::async_trait;
use postpilot_application::ports::generation::{GenerationError, ImageGenerator};
use std::io::Write;
use tempfile::TempPath;
use tracing::debug;
use url::Url;

/// Image generator that GETs `{base_url}/{percent-encoded description}`
/// and stores the response body in a fresh temporary file.
pub struct HttpImageGenerator {
    http: reqwest::Client,
    base_url: Url,
    file_suffix: String,
}

impl HttpImageGenerator {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        file_suffix: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            GenerationError::RequestFailed(format!("Invalid image URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GenerationError::RequestFailed(format!(
                "Invalid image URL '{}'",
                base_url
            )));
        }

        Ok(Self {
            http,
            base_url,
            file_suffix: file_suffix.into(),
        })
    }

    fn image_url(&self, description: &str) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(description);
        }
        url
    }
}

#[async_trait]
impl ImageGenerator for HttpImageGenerator {
    async fn render(&self, description: &str) -> Result<TempPath, GenerationError> {
        let url = self.image_url(description);
        debug!("Requesting image from {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;
        if bytes.is_empty() {
            return Err(GenerationError::MalformedResponse(
                "image response was empty".to_string(),
            ));
        }

        let mut file = tempfile::Builder::new()
            .prefix("postpilot-")
            .suffix(&self.file_suffix)
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;

        Ok(file.into_temp_path())
    }
}
