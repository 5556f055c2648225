//! Progress notification port
//!
//! Defines the interface for reporting progress while an operator action
//! waits on the network.

use std::fmt;

/// A single awaited step of an operator action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    RestoreSession,
    Login,
    Logout,
    GenerateCaption,
    RenderImage,
    Publish,
    AccountAction(postpilot_domain::Action),
}

impl Step {
    pub fn label(&self) -> String {
        match self {
            Step::RestoreSession => "Restoring saved session".to_string(),
            Step::Login => "Logging in".to_string(),
            Step::Logout => "Logging out".to_string(),
            Step::GenerateCaption => "Writing caption".to_string(),
            Step::RenderImage => "Rendering image".to_string(),
            Step::Publish => "Publishing post".to_string(),
            Step::AccountAction(action) => format!("Running {}", action),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Callback for progress updates
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called before the step's network call starts
    fn on_step_start(&self, step: &Step);

    /// Called when the step finishes
    fn on_step_complete(&self, step: &Step, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_step_start(&self, _step: &Step) {}
    fn on_step_complete(&self, _step: &Step, _success: bool) {}
}
