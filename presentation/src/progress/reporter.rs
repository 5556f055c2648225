//! Progress reporting while operator actions wait on the network

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use postpilot_application::ports::progress::{ProgressNotifier, Step};
use std::sync::Mutex;
use std::time::Duration;

/// Shows one spinner per awaited step
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_step_start(&self, step: &Step) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{}...", step.label()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock()
            && let Some(previous) = current.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_step_complete(&self, step: &Step, success: bool) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(pb) = current.take() {
            let status = if success {
                format!("{} {}", "v".green(), step.label())
            } else {
                format!("{} {} (failed)", "x".red(), step.label())
            };
            pb.finish_with_message(status);
        }
    }
}
