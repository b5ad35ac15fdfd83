//! CLI presenter for output formatting

use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::content::ContentKind;

/// Presenter for CLI output formatting.
///
/// Status lines go to stderr; only the generated alt text goes to stdout.
/// Methods take `&self` so a shared presenter can back use case callbacks.
pub struct Presenter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    /// Start a spinner with message
    pub fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&self, message: &str) {
        if let Some(spinner) = self.take_spinner() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&self, message: &str) {
        if let Some(spinner) = self.take_spinner() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the generated alt text)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Report what the clipboard turned out to hold
    pub fn content_found(&self, kind: ContentKind) {
        if let Some(message) = Self::content_message(kind) {
            self.info(message);
        }
    }

    fn content_message(kind: ContentKind) -> Option<&'static str> {
        match kind {
            ContentKind::Image => Some("Image found in clipboard."),
            ContentKind::Text => Some("Text found in clipboard."),
            // Reported once the run ends
            ContentKind::Empty => None,
        }
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
