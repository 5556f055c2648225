//! Infrastructure layer for postpilot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod account;
pub mod config;
pub mod generation;
pub mod http;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use account::HttpAccountClient;
pub use config::{
    ConfigLoader, ConfigValidationError, FileAccountConfig, FileConfig, FileHttpConfig,
    FileImageGenerationConfig, FileLoggingConfig, FileReplConfig, FileTextGenerationConfig,
};
pub use generation::{ChatCompletionsGenerator, HttpImageGenerator};
pub use http::build_http_client;
pub use logging::JsonlActivityLogger;
pub use session::FileSessionStore;
