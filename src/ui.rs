//! Terminal presentation: color styles, the progress spinner, and prompt
//! cancellation handling shared by the interactive flows.

use std::fmt::Display;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::InquireError;
use owo_colors::OwoColorize;

use crate::output;

/// Semantic color helpers.
///
/// Every helper degrades to the plain text when colors are disabled.
pub struct Style;

impl Style {
    /// Section headers.
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |s| s.bold().to_string())
    }

    /// De-emphasized text: labels, endpoints, version numbers.
    pub fn dim<T: Display>(text: T) -> String {
        paint(text, |s| s.dimmed().to_string())
    }

    /// Primary values: provider names, models, commands.
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |s| s.cyan().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, |s| s.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, |s| s.red().bold().to_string())
    }

    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |s| s.yellow().to_string())
    }
}

fn paint<T: Display>(text: T, style: impl FnOnce(&str) -> String) -> String {
    let plain = text.to_string();
    if output::colors_enabled() {
        style(&plain)
    } else {
        plain
    }
}

/// Spinner shown while waiting on the endpoint. Clears itself on drop.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner().with_message(message.to_owned());
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style.tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷ "));
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Runs an interactive flow, treating Ctrl+C or Escape in a prompt as a
/// normal exit rather than an error.
pub fn run_cancellable(flow: impl FnOnce() -> Result<()>) -> Result<()> {
    match flow() {
        Err(e) if is_cancellation(&e) => {
            println!();
            Ok(())
        }
        outcome => outcome,
    }
}

fn is_cancellation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}
