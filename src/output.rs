//! Operator-facing terminal output.
//!
//! Everything here writes to stderr: stdout is reserved for the document itself.
//! Colors respect NO_COLOR, CLICOLOR and CLICOLOR_FORCE.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Print error (red bold "Error:" prefix)
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{} {}", "Error:".red().bold(), msg.to_string().red());
}

/// Print a hint line (yellow)
pub fn hint(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", msg.to_string().yellow());
}

/// Print warning (yellow "Warning:" prefix)
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{} {}", "Warning:".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{} {}", "✅".green(), msg.to_string().green());
}

/// Stage-by-stage progress indicator; a no-op when disabled.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn start(enabled: bool, msg: impl Into<String>) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        // The template is a literal; a parse failure only loses styling.
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(80));
        let msg: String = msg.into();
        bar.set_message(msg.cyan().to_string());
        Self { bar: Some(bar) }
    }

    pub fn stage(&self, msg: impl Into<String>) {
        if let Some(bar) = &self.bar {
            let msg: String = msg.into();
            bar.set_message(msg.blue().to_string());
        }
    }

    pub fn succeed(self, msg: &str) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
            eprintln!("{} {}", "✔".green(), msg.green());
        }
    }

    pub fn fail(self, msg: &str) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
            eprintln!("{} {}", "✖".red(), msg.red());
        }
    }
}
