//! Configuration file loading for postpilot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `POSTPILOT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./postpilot.toml` or `./.postpilot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/postpilot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAccountConfig, FileConfig, FileHttpConfig,
    FileImageGenerationConfig, FileLoggingConfig, FileReplConfig, FileTextGenerationConfig,
};
pub use loader::ConfigLoader;
