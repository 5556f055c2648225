//! REPL (Read-Eval-Print Loop) for operating the account

use super::command::ReplCommand;
use super::input::{MaskedInput, masking_supported};
use crate::ConsoleFormatter;
use postpilot_application::{BotError, BotOrchestrator, IntentOutcome, LoginOutcome};
use postpilot_domain::{Intent, OperatorState};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::config::{ColorMode, Config};
use rustyline::{Editor, Result as RlResult};
use std::path::PathBuf;
use tracing::{debug, warn};

type LineEditor = Editor<MaskedInput, DefaultHistory>;

/// Interactive bot REPL
///
/// Owns the operator state for the lifetime of the console; any draft
/// still pending on exit is dropped, which removes its image.
pub struct BotRepl {
    orchestrator: BotOrchestrator,
    state: OperatorState,
    history_file: Option<PathBuf>,
    startup_login: Option<String>,
}

enum Flow {
    Continue,
    Quit,
}

impl BotRepl {
    pub fn new(orchestrator: BotOrchestrator) -> Self {
        Self {
            orchestrator,
            state: OperatorState::new(),
            history_file: dirs::data_dir().map(|p| p.join("postpilot").join("history.txt")),
            startup_login: None,
        }
    }

    /// Override the history file location; a leading `~/` is expanded
    pub fn with_history_file(mut self, path: Option<&str>) -> Self {
        if let Some(path) = path {
            self.history_file = Some(expand_home(path));
        }
        self
    }

    /// Log in as `username` right after startup (unless a session is restored)
    pub fn with_startup_login(mut self, username: Option<String>) -> Self {
        self.startup_login = username;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        // Masking rides on the highlighter, so it must run even without colors
        let config = Config::builder().color_mode(ColorMode::Forced).build();
        let mut rl = LineEditor::with_config(config)?;
        rl.set_helper(Some(MaskedInput::default()));

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.restore_session().await;
        println!("{}", ConsoleFormatter::welcome(self.logged_in_user()));

        if let Some(username) = self.startup_login.take() {
            self.login(&mut rl, Some(username)).await;
        }

        loop {
            match rl.readline(&self.prompt()) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if let Flow::Quit = self.handle_line(&mut rl, line).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file
            && let Err(e) = rl.save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn logged_in_user(&self) -> Option<&str> {
        self.state.username().filter(|_| self.state.is_logged_in())
    }

    fn prompt(&self) -> String {
        match (self.logged_in_user(), self.state.has_pending()) {
            (Some(user), true) => format!("{} [draft]> ", user),
            (Some(user), false) => format!("{}> ", user),
            (None, _) => "postpilot> ".to_string(),
        }
    }

    async fn restore_session(&mut self) {
        match self.orchestrator.restore(&mut self.state).await {
            Ok(Some(username)) => debug!("Restored session for {}", username),
            Ok(None) => {}
            Err(e) => {
                warn!("Could not restore saved session: {}", e);
                eprintln!("{}", ConsoleFormatter::error(&e));
            }
        }
    }

    async fn handle_line(&mut self, rl: &mut LineEditor, line: &str) -> Flow {
        match ReplCommand::parse(line) {
            ReplCommand::Quit => {
                println!("Bye!");
                return Flow::Quit;
            }
            ReplCommand::Help => println!("{}", ConsoleFormatter::help()),
            ReplCommand::Status => println!("{}", ConsoleFormatter::status(&self.state)),
            ReplCommand::Login(username) => self.login(rl, username).await,
            ReplCommand::Logout => match self.orchestrator.logout(&mut self.state).await {
                Ok(()) => println!("{}", ConsoleFormatter::logged_out()),
                Err(e) => Self::report(&e),
            },
            ReplCommand::Draft(topic) => {
                match self.orchestrator.draft_post(&mut self.state, &topic).await {
                    Ok(content) => println!("{}", ConsoleFormatter::draft_preview(content)),
                    Err(e) => Self::report(&e),
                }
            }
            ReplCommand::Publish => match self.orchestrator.publish_pending(&mut self.state).await {
                Ok(post) => println!("{}", ConsoleFormatter::published(&post)),
                Err(e) => Self::report(&e),
            },
            ReplCommand::Cancel => match self.orchestrator.cancel_pending(&mut self.state) {
                Ok(()) => println!("{}", ConsoleFormatter::cancelled()),
                Err(e) => Self::report(&e),
            },
            ReplCommand::Intent(intent) => self.run_intent(&intent).await,
            ReplCommand::Text(text) => {
                let result = self.orchestrator.execute_command(&mut self.state, &text).await;
                self.show_outcome(result);
            }
            ReplCommand::Usage(usage) => println!("{}", ConsoleFormatter::usage(usage)),
            ReplCommand::Unknown(command) => {
                println!("{}", ConsoleFormatter::unknown_command(&command))
            }
        }
        Flow::Continue
    }

    async fn run_intent(&mut self, intent: &Intent) {
        let result = self.orchestrator.execute_intent(&mut self.state, intent).await;
        self.show_outcome(result);
    }

    fn show_outcome(&self, result: Result<IntentOutcome, BotError>) {
        match result {
            Ok(IntentOutcome::Drafted) => match self.state.pending() {
                Some(content) => println!("{}", ConsoleFormatter::draft_preview(content)),
                None => println!("{}", ConsoleFormatter::outcome(&IntentOutcome::Drafted)),
            },
            Ok(outcome) => println!("{}", ConsoleFormatter::outcome(&outcome)),
            Err(e) => Self::report(&e),
        }
    }

    async fn login(&mut self, rl: &mut LineEditor, username: Option<String>) {
        if let Some(user) = self.logged_in_user() {
            let outcome = LoginOutcome::AlreadyLoggedIn(user.to_string());
            println!("{}", ConsoleFormatter::login(&outcome));
            return;
        }

        let username = match username {
            Some(username) => username,
            None => match rl.readline("Username: ") {
                Ok(line) if !line.trim().is_empty() => line.trim().to_string(),
                _ => return,
            },
        };
        let Some(password) = Self::read_password(rl) else {
            return;
        };

        match self
            .orchestrator
            .login(&mut self.state, &username, &password)
            .await
        {
            Ok(outcome) => println!("{}", ConsoleFormatter::login(&outcome)),
            Err(e) => Self::report(&e),
        }
    }

    fn read_password(rl: &mut LineEditor) -> Option<String> {
        if !masking_supported() {
            warn!("Terminal does not support masked input");
            println!("{}", ConsoleFormatter::password_visible());
        }
        if let Some(helper) = rl.helper_mut() {
            helper.masking = true;
        }
        let result = rl.readline("Password: ");
        if let Some(helper) = rl.helper_mut() {
            helper.masking = false;
        }

        match result {
            Ok(password) if !password.is_empty() => Some(password),
            _ => None,
        }
    }

    fn report(err: &BotError) {
        eprintln!("{}", ConsoleFormatter::error(err));
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
