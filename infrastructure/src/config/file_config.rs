//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section has defaults so a partial
//! file (or none at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("http.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("text_generation.model cannot be empty")]
    EmptyModelName,

    #[error("{0}.base_url cannot be empty")]
    EmptyBaseUrl(&'static str),

    #[error("text_generation.api_key_env cannot be empty")]
    EmptyApiKeyEnv,
}

/// Account bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAccountConfig {
    /// Base URL of the account-automation bridge
    pub base_url: String,
    /// Session metadata document (`{username, logged_in}`)
    pub session_file: PathBuf,
    /// Opaque client settings blob
    pub settings_file: PathBuf,
}

impl Default for FileAccountConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            session_file: PathBuf::from("session.json"),
            settings_file: PathBuf::from("account_settings.json"),
        }
    }
}

/// Text-generation backend configuration (OpenAI-compatible chat completions)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTextGenerationConfig {
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileTextGenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "meta-llama/llama-4-scout-17b-16e-instruct".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
        }
    }
}

/// Image-generation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageGenerationConfig {
    /// The URL-encoded prompt is appended as the last path segment
    pub base_url: String,
    /// Suffix of the temporary image files
    pub file_suffix: String,
}

impl Default for FileImageGenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://image.pollinations.ai/prompt/".to_string(),
            file_suffix: ".jpg".to_string(),
        }
    }
}

/// Shared HTTP client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Request timeout in seconds; no timeout when unset
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated log files; file logging is off when unset
    pub log_dir: Option<PathBuf>,
    /// JSONL activity journal; disabled when unset
    pub activity_log: Option<PathBuf>,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: Some(PathBuf::from("logs")),
            activity_log: None,
        }
    }
}

/// REPL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show spinners while waiting on the network
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub account: FileAccountConfig,
    pub text_generation: FileTextGenerationConfig,
    pub image_generation: FileImageGenerationConfig,
    pub http: FileHttpConfig,
    pub logging: FileLoggingConfig,
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.http.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.text_generation.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.text_generation.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyEnv);
        }

        for (section, url) in [
            ("account", &self.account.base_url),
            ("text_generation", &self.text_generation.base_url),
            ("image_generation", &self.image_generation.base_url),
        ] {
            if url.trim().is_empty() {
                return Err(ConfigValidationError::EmptyBaseUrl(section));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[account]
base_url = "http://bridge.local:9000"
session_file = "state/session.json"
settings_file = "state/settings.json"

[text_generation]
base_url = "https://llm.example.com/v1"
model = "llama-3.3-70b"
api_key_env = "LLM_KEY"

[image_generation]
base_url = "https://img.example.com/prompt/"
file_suffix = ".png"

[http]
timeout_seconds = 120

[logging]
log_dir = "var/log"
activity_log = "var/activity.jsonl"

[repl]
show_progress = false
history_file = "~/.local/share/postpilot/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.account.base_url, "http://bridge.local:9000");
        assert_eq!(
            config.account.settings_file,
            PathBuf::from("state/settings.json")
        );
        assert_eq!(config.text_generation.model, "llama-3.3-70b");
        assert_eq!(config.text_generation.api_key_env, "LLM_KEY");
        assert_eq!(config.image_generation.file_suffix, ".png");
        assert_eq!(config.http.timeout_seconds, Some(120));
        assert_eq!(
            config.logging.activity_log,
            Some(PathBuf::from("var/activity.jsonl"))
        );
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[text_generation]
model = "llama-3.1-8b-instant"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.text_generation.model, "llama-3.1-8b-instant");
        // Defaults should apply
        assert_eq!(
            config.text_generation.base_url,
            "https://api.groq.com/openai/v1"
        );
        assert_eq!(config.account.session_file, PathBuf::from("session.json"));
        assert!(config.http.timeout_seconds.is_none());
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.text_generation.api_key_env, "GROQ_API_KEY");
        assert_eq!(
            config.image_generation.base_url,
            "https://image.pollinations.ai/prompt/"
        );
        assert_eq!(config.logging.log_dir, Some(PathBuf::from("logs")));
        assert!(config.logging.activity_log.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[http]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let toml_str = r#"
[text_generation]
model = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName)
        ));
    }

    #[test]
    fn test_validate_empty_base_url() {
        let toml_str = r#"
[account]
base_url = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "account.base_url cannot be empty");
    }
}
