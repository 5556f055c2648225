//! Slash-command parsing for the REPL
//!
//! Lines starting with `/` are explicit commands with positional
//! arguments; anything else is handed to the free-text classifier.

use postpilot_domain::Intent;

/// One parsed REPL line
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Help,
    Quit,
    Status,
    Login(Option<String>),
    Logout,
    /// Generate a draft for the topic
    Draft(String),
    Publish,
    Cancel,
    /// An account action built from explicit arguments
    Intent(Intent),
    /// Free text for the classifier
    Text(String),
    /// Known command with missing arguments; carries the usage line
    Usage(&'static str),
    Unknown(String),
}

const DM_USAGE: &str = "/dm <username> <message>";
const LIKE_USAGE: &str = "/like <post url>";
const COMMENT_USAGE: &str = "/comment <post url> <text>";
const FOLLOW_USAGE: &str = "/follow <username>";
const UNFOLLOW_USAGE: &str = "/unfollow <username>";
const POST_USAGE: &str = "/post <topic>";

impl ReplCommand {
    /// Parse a trimmed, non-empty input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return ReplCommand::Text(line.to_string());
        };

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match name {
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            "status" => ReplCommand::Status,
            "login" => ReplCommand::Login(first_word(args).map(str::to_string)),
            "logout" => ReplCommand::Logout,
            "publish" => ReplCommand::Publish,
            "cancel" => ReplCommand::Cancel,
            "post" => match non_empty(args) {
                Some(topic) => ReplCommand::Draft(topic.to_string()),
                None => ReplCommand::Usage(POST_USAGE),
            },
            "dm" => match word_and_rest(args) {
                Some((username, message)) => ReplCommand::Intent(Intent::message(username, message)),
                None => ReplCommand::Usage(DM_USAGE),
            },
            "like" => match first_word(args) {
                Some(url) => ReplCommand::Intent(Intent::like(url)),
                None => ReplCommand::Usage(LIKE_USAGE),
            },
            "comment" => match word_and_rest(args) {
                Some((url, text)) => ReplCommand::Intent(Intent::comment(text, url)),
                None => ReplCommand::Usage(COMMENT_USAGE),
            },
            "follow" => match first_word(args) {
                Some(username) => ReplCommand::Intent(Intent::follow(username)),
                None => ReplCommand::Usage(FOLLOW_USAGE),
            },
            "unfollow" => match first_word(args) {
                Some(username) => ReplCommand::Intent(Intent::unfollow(username)),
                None => ReplCommand::Usage(UNFOLLOW_USAGE),
            },
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

fn non_empty(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

fn first_word(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

fn word_and_rest(args: &str) -> Option<(&str, &str)> {
    let (word, rest) = args.split_once(char::is_whitespace)?;
    Some((word, non_empty(rest)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use postpilot_domain::{Action, params};

    #[test]
    fn test_plain_text_goes_to_classifier() {
        assert_eq!(
            ReplCommand::parse("  follow bob "),
            ReplCommand::Text("follow bob".to_string())
        );
    }

    #[test]
    fn test_session_commands() {
        assert_eq!(ReplCommand::parse("/quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/status"), ReplCommand::Status);
        assert_eq!(ReplCommand::parse("/login"), ReplCommand::Login(None));
        assert_eq!(
            ReplCommand::parse("/login alice"),
            ReplCommand::Login(Some("alice".to_string()))
        );
    }

    #[test]
    fn test_dm_keeps_whole_message() {
        let ReplCommand::Intent(intent) = ReplCommand::parse("/dm bob see you at 5 to 6") else {
            panic!("expected intent");
        };
        assert_eq!(intent.action, Action::Message);
        assert_eq!(intent.param(params::USERNAME), Some("bob"));
        assert_eq!(intent.param(params::MESSAGE), Some("see you at 5 to 6"));
    }

    #[test]
    fn test_comment_url_comes_first() {
        let ReplCommand::Intent(intent) =
            ReplCommand::parse("/comment https://example.com/p/1 great on so many levels")
        else {
            panic!("expected intent");
        };
        assert_eq!(intent.action, Action::Comment);
        assert_eq!(intent.param(params::POST_URL), Some("https://example.com/p/1"));
        assert_eq!(
            intent.param(params::COMMENT_TEXT),
            Some("great on so many levels")
        );
    }

    #[test]
    fn test_post_takes_topic() {
        assert_eq!(
            ReplCommand::parse("/post autumn in the city"),
            ReplCommand::Draft("autumn in the city".to_string())
        );
    }

    #[test]
    fn test_missing_arguments_show_usage() {
        assert_eq!(ReplCommand::parse("/dm bob"), ReplCommand::Usage(DM_USAGE));
        assert_eq!(ReplCommand::parse("/like"), ReplCommand::Usage(LIKE_USAGE));
        assert_eq!(ReplCommand::parse("/post   "), ReplCommand::Usage(POST_USAGE));
        assert_eq!(
            ReplCommand::parse("/unfollow"),
            ReplCommand::Usage(UNFOLLOW_USAGE)
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/dance now"),
            ReplCommand::Unknown("/dance now".to_string())
        );
    }
}
