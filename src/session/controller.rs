use crate::completion::ErrorKind;

use super::transcript::{Message, Role, Transcript};

/// Lifecycle of the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No request outstanding, ready to submit.
    #[default]
    Idle,
    /// Request sent, no fragments received yet.
    AwaitingResponse,
    /// Fragments arriving.
    Streaming,
    /// The last request failed; partial content is retained.
    Error(ErrorKind),
}

impl SessionStatus {
    /// A request is outstanding while awaiting or streaming.
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::AwaitingResponse | Self::Streaming)
    }
}

/// Identifies one submitted request.
///
/// Every submit and reset advances the session's generation, so callbacks
/// belonging to a torn-down or superseded request become no-ops instead of
/// mutating a later turn's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Context handed to the caller on a successful submit.
#[derive(Debug)]
pub struct Turn {
    /// Token the caller must pass back with every stream callback.
    pub generation: Generation,
    /// Transcript snapshot to send to the endpoint, excluding the empty
    /// assistant placeholder.
    pub context: Vec<Message>,
}

/// Owns the transcript, the draft input, and the in-flight request state.
///
/// Single-threaded by design: the frontend drives it from one task, and the
/// status field is what gates re-submission while a request is outstanding.
#[derive(Debug, Default)]
pub struct SessionController {
    transcript: Transcript,
    draft: String,
    status: SessionStatus,
    generation: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft input. No validation; trimming happens at submit.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Starts a new turn if the session is free and the draft is non-blank.
    ///
    /// Appends the trimmed draft as a user message plus an empty assistant
    /// placeholder, clears the draft, and returns the request context.
    /// Returns `None` (leaving all state untouched) while a request is
    /// outstanding or the draft is empty — a racing submit is a silent no-op.
    /// Submitting from the error state starts a fresh turn.
    pub fn submit(&mut self) -> Option<Turn> {
        if self.status().is_busy() {
            return None;
        }
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }

        self.transcript.push(Role::User, text);
        self.draft.clear();

        // Snapshot before the placeholder so it is not sent to the endpoint.
        let context = self.transcript.messages().to_vec();
        self.transcript.push(Role::Assistant, "");

        self.status = SessionStatus::AwaitingResponse;
        self.generation += 1;
        Some(Turn {
            generation: Generation(self.generation),
            context,
        })
    }

    /// Applies one fragment of the streamed reply, in arrival order.
    ///
    /// The first fragment moves the session from awaiting to streaming.
    /// Fragments carrying a stale generation, or arriving after the turn
    /// completed or failed, are dropped.
    pub fn on_token(&mut self, generation: Generation, fragment: &str) {
        if !self.is_current(generation) || !self.status().is_busy() {
            return;
        }
        if let Some(message) = self.transcript.last_mut() {
            message.content.push_str(fragment);
        }
        self.status = SessionStatus::Streaming;
    }

    /// Finalizes the turn. The assistant message content is now immutable.
    ///
    /// Idempotent: completing an already-finished or stale turn is a no-op.
    pub fn on_complete(&mut self, generation: Generation) {
        if !self.is_current(generation) || !self.status().is_busy() {
            return;
        }
        self.status = SessionStatus::Idle;
    }

    /// Marks the turn as failed, keeping whatever partial content arrived.
    pub fn on_error(&mut self, generation: Generation, kind: ErrorKind) {
        if !self.is_current(generation) || !self.status().is_busy() {
            return;
        }
        self.status = SessionStatus::Error(kind);
    }

    /// Returns from the error state to idle without touching the transcript.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status(), SessionStatus::Error(_)) {
            self.status = SessionStatus::Idle;
        }
    }

    /// Tears the session down to its initial state.
    ///
    /// Advances the generation so late callbacks from any in-flight request
    /// are dropped rather than applied to the fresh transcript.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.draft.clear();
        self.status = SessionStatus::Idle;
        self.generation += 1;
    }

    const fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.generation
    }
}
