//! Interactive chat mode.
//!
//! Provides a REPL-style interface with slash commands, driving the session
//! controller and streaming replies into the terminal.

/// Slash command parsing and autocomplete.
pub mod command;
mod repl;
mod ui;

pub use repl::{ChatSession, SessionConfig};
