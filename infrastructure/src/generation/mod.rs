//! Generative backend adapters
//!
//! - [`ChatCompletionsGenerator`]: OpenAI-compatible chat completions
//!   endpoint implementing [`TextGenerator`](postpilot_application::TextGenerator)
//! - [`HttpImageGenerator`]: prompt-in-URL image service implementing
//!   [`ImageGenerator`](postpilot_application::ImageGenerator)

mod chat;
mod image;

pub use chat::ChatCompletionsGenerator;
pub use image::HttpImageGenerator;
