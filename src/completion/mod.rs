//! Completion endpoint client for OpenAI-compatible APIs.

mod client;
mod error;
mod prompt;
mod sse;

pub use client::{CompletionClient, CompletionRequest, FragmentStream};
pub use error::{CompletionError, ErrorKind};
pub use prompt::DEFAULT_SYSTEM_PROMPT;
