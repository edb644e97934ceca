//! # skygpt - Streaming Chat CLI
//!
//! `skygpt` is a command-line chat assistant for OpenAI-compatible API
//! endpoints. It streams replies token by token and keeps the conversation
//! transcript across turns in interactive mode.
//!
//! ## Features
//!
//! - **Streaming replies**: See the answer as it arrives
//! - **Interactive mode**: Multi-turn conversations with `skygpt chat`
//! - **One-shot mode**: Pipe a prompt through stdin or pass a file
//! - **Multiple providers**: Configure and switch between different API providers
//!
//! ## Quick Start
//!
//! ```bash
//! # Ask a one-shot question
//! echo "What is Rust?" | skygpt
//!
//! # Ask from a file
//! skygpt ./question.md
//!
//! # Interactive chat mode
//! skygpt chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/skygpt/config.toml`:
//!
//! ```toml
//! [skygpt]
//! provider = "ollama"
//! model = "gemma3:12b"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b", "llama3.2"]
//! ```

/// Interactive chat mode (REPL and slash commands).
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Completion endpoint client for OpenAI-compatible APIs.
pub mod completion;

/// Configuration file management and provider settings.
pub mod config;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Chat session state: transcript and turn lifecycle.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
