//! Prompt text for content generation

/// System instruction asking the text backend for a strict two-field JSON object.
pub const CONTENT_SYSTEM_PROMPT: &str = r#"Create social media post content. Respond with JSON only, no prose:
{
    "caption": "post caption with hashtags",
    "image_prompt": "detailed image generation prompt"
}"#;
