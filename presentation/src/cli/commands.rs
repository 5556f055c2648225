//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for postpilot
#[derive(Parser, Debug)]
#[command(name = "postpilot")]
#[command(author, version, about = "Operate a social-media account from plain-English commands")]
#[command(long_about = r#"
Postpilot drives one social-media account from an interactive prompt.

Free-text commands are classified into actions:
  send <message> to <username>      Direct message
  post about <topic>                Draft a caption and image for review
  like <post url>                   Like a post
  comment <text> on <post url>      Comment on a post
  follow <username> / unfollow <username>

Drafted posts are only published after /publish.

Configuration files are loaded from (in priority order):
1. POSTPILOT_<SECTION>__<KEY>   Environment variables
2. --config <path>              Explicit config file
3. ./postpilot.toml             Project-level config
4. ~/.config/postpilot/config.toml   Global config

Example:
  postpilot
  postpilot -vv --config ./bot.toml
"#)]
pub struct Cli {
    /// Log in as this user at startup (password is prompted)
    #[arg(short, long, value_name = "USERNAME")]
    pub username: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "postpilot",
            "-vv",
            "--quiet",
            "--config",
            "bot.toml",
            "--username",
            "alice",
        ]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("bot.toml")));
        assert_eq!(cli.username.as_deref(), Some("alice"));
        assert!(!cli.no_config);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["postpilot"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(!cli.show_config);
    }
}
