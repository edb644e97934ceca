//! Chat session state: transcript and turn lifecycle.
//!
//! The [`SessionController`] owns the message transcript and the state of the
//! in-flight completion request. Frontends (the interactive REPL, the one-shot
//! prompt mode) only read status and drive it through its operations.

mod controller;
mod transcript;

pub use controller::{Generation, SessionController, SessionStatus, Turn};
pub use transcript::{Message, Role, Transcript};
