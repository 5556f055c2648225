//! Line editor helper that can hide what is typed

use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow;
use std::io::IsTerminal;

/// Replaces every typed character with `*` while `masking` is set.
///
/// Masking works through the highlighter, which rustyline only calls when it
/// drives the terminal itself. See [`masking_supported`].
#[derive(Debug, Default)]
pub struct MaskedInput {
    pub masking: bool,
}

impl Highlighter for MaskedInput {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.masking {
            Cow::Owned("*".repeat(line.chars().count()))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.masking
    }
}

/// Whether rustyline will run the highlighter for this terminal.
///
/// Off a tty, or on the terminals rustyline treats as unsupported, input is
/// read as a plain line and echoed as typed.
pub fn masking_supported() -> bool {
    masking_supported_for(
        std::env::var("TERM").ok().as_deref(),
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
    )
}

fn masking_supported_for(term: Option<&str>, is_tty: bool) -> bool {
    is_tty && !matches!(term, Some("dumb" | "cons25" | "emacs"))
}

impl Completer for MaskedInput {
    type Candidate = String;
}

impl Hinter for MaskedInput {
    type Hint = String;
}

impl Validator for MaskedInput {}

impl Helper for MaskedInput {}
