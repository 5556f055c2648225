//! Console output formatter for bot results

use colored::Colorize;
use postpilot_application::{BotError, IntentOutcome, LoginOutcome, PublishedPost};
use postpilot_domain::{Action, FailureKind, GeneratedContent, OperatorState};

/// Formats orchestrator results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown when the REPL starts
    pub fn welcome(username: Option<&str>) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│                 Postpilot                   │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n\n");
        match username {
            Some(user) => output.push_str(&format!(
                "{} {}\n",
                "Logged in as:".cyan().bold(),
                user
            )),
            None => output.push_str(&format!(
                "{} use /login to start\n",
                "Not logged in:".yellow().bold()
            )),
        }
        output.push_str("Type /help for commands.\n");
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", "Commands:".cyan().bold()));
        for (command, description) in [
            ("/login [username]", "Log in (restores a saved session when possible)"),
            ("/logout", "Log out and forget the saved session"),
            ("/status", "Show the current user and pending draft"),
            ("/post <topic>", "Draft a caption and image for review"),
            ("/publish", "Publish the pending draft"),
            ("/cancel", "Discard the pending draft"),
            ("/dm <username> <message>", "Send a direct message"),
            ("/like <post url>", "Like a post"),
            ("/comment <post url> <text>", "Comment on a post"),
            ("/follow <username>", "Follow a user"),
            ("/unfollow <username>", "Unfollow a user"),
            ("/help", "Show this help"),
            ("/quit", "Exit"),
        ] {
            output.push_str(&format!("  {:<28} {}\n", command, description));
        }
        output.push_str(&format!("\n{}\n", "Or just type:".cyan().bold()));
        output.push_str("  send <message> to <username>\n");
        output.push_str("  create a post about <topic>\n");
        output.push_str("  like <post url>\n");
        output.push_str("  comment <text> on <post url>\n");
        output.push_str("  follow <username> | unfollow <username>\n");
        output
    }

    pub fn status(state: &OperatorState) -> String {
        let user = match state.username().filter(|_| state.is_logged_in()) {
            Some(user) => user.green().to_string(),
            None => "not logged in".yellow().to_string(),
        };
        let draft = match state.pending() {
            Some(content) => format!("pending ({})", content.caption()),
            None => "none".to_string(),
        };
        format!(
            "{} {}\n{} {}\n{} {}",
            "User: ".cyan().bold(),
            user,
            "Draft:".cyan().bold(),
            draft,
            "Handle:".cyan().bold(),
            state.handle()
        )
    }

    pub fn login(outcome: &LoginOutcome) -> String {
        match outcome {
            LoginOutcome::AlreadyLoggedIn(user) => {
                format!("{} {}", "Already logged in as:".green(), user)
            }
            LoginOutcome::Restored(user) => {
                format!("{} {}", "Restored saved session for".green(), user)
            }
            LoginOutcome::LoggedIn(user) => {
                format!("{} {}", "Successfully logged in as".green(), user)
            }
        }
    }

    pub fn logged_out() -> String {
        "Successfully logged out!".green().to_string()
    }

    /// Preview of a drafted post awaiting publish or cancel
    pub fn draft_preview(content: &GeneratedContent) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", "── Draft ──".yellow().bold()));
        output.push_str(&format!("{}\n{}\n\n", "Caption:".cyan().bold(), content.caption()));
        output.push_str(&format!(
            "{} {}\n\n",
            "Image:".cyan().bold(),
            content.image_path().display()
        ));
        output.push_str("Type /publish to post it or /cancel to discard it.");
        output
    }

    pub fn published(post: &PublishedPost) -> String {
        format!("{} {}", "Posted successfully!".green(), post.caption.dimmed())
    }

    pub fn cancelled() -> String {
        "Post cancelled".to_string()
    }

    pub fn outcome(outcome: &IntentOutcome) -> String {
        match outcome {
            IntentOutcome::Completed { action, target } => {
                let message = match action {
                    Action::Message => format!("Message sent to {}!", target),
                    Action::Like => format!("Post liked: {}", target),
                    Action::Comment => format!("Comment posted on {}", target),
                    Action::Follow => format!("Now following {}", target),
                    Action::Unfollow => format!("Unfollowed {}", target),
                    Action::Post => "Draft ready".to_string(),
                };
                message.green().to_string()
            }
            IntentOutcome::Drafted => "Draft ready".green().to_string(),
        }
    }

    pub fn password_visible() -> String {
        format!(
            "{} this terminal cannot hide input; the password will be visible as you type",
            "Warning:".yellow().bold()
        )
    }

    pub fn usage(usage: &str) -> String {
        format!("{} {}", "Usage:".yellow().bold(), usage)
    }

    pub fn unknown_command(command: &str) -> String {
        format!("Unknown command: {}\nType /help for available commands", command)
    }

    /// Turn a failed action into an operator-facing message
    pub fn error(err: &BotError) -> String {
        let hint = match err.kind() {
            FailureKind::NotLoggedIn => "Please log in first! (/login)",
            FailureKind::NoPendingContent => "Nothing to publish. Draft one with /post <topic>.",
            FailureKind::Command => "Sorry, I didn't understand that. Type /help for examples.",
            FailureKind::Generation => "Failed to generate post content. Please try again.",
            FailureKind::Account => "The account backend refused the request.",
            FailureKind::Filesystem => "A local file could not be read or written.",
        };

        match err {
            BotError::NotLoggedIn | BotError::NoPendingContent => hint.yellow().to_string(),
            _ => format!("{} {}\n  {}", "Error:".red().bold(), hint, err.to_string().dimmed()),
        }
    }
}
