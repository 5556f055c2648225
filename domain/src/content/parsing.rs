//! Parsing of text-backend responses.
//!
//! Backends are asked for bare JSON but sometimes wrap it in a markdown
//! fence (` ```json ... ``` `). The fence is stripped before parsing.

use super::entities::ContentDraft;
use crate::core::error::DomainError;

/// Remove a surrounding markdown code fence, if any.
///
/// The opening fence may carry an info string (` ```json `). Text without a
/// fence is returned trimmed and otherwise untouched.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        // Single-line fence: ```json {...}```
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a backend response into a [`ContentDraft`].
///
/// Both `caption` and `image_prompt` must be present and non-empty strings.
pub fn parse_content_response(response: &str) -> Result<ContentDraft, DomainError> {
    let json = strip_code_fence(response);
    let draft: ContentDraft = serde_json::from_str(json)
        .map_err(|e| DomainError::MalformedContent(format!("{} in {:?}", e, truncate(json))))?;

    if draft.caption.trim().is_empty() {
        return Err(DomainError::MalformedContent("empty caption".to_string()));
    }
    if draft.image_prompt.trim().is_empty() {
        return Err(DomainError::MalformedContent(
            "empty image_prompt".to_string(),
        ));
    }

    Ok(ContentDraft {
        caption: draft.caption.trim().to_string(),
        image_prompt: draft.image_prompt.trim().to_string(),
    })
}

fn truncate(text: &str) -> String {
    const LIMIT: usize = 120;
    match text.char_indices().nth(LIMIT) {
        Some((at, _)) => format!("{}...", &text[..at]),
        None => text.to_string(),
    }
}
