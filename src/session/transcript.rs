use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire-format name of the role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single chat message.
///
/// User content is fixed at creation. Assistant content grows as fragments
/// arrive from the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Unique within a session, stable for the message's lifetime.
    pub id: u64,
    pub role: Role,
    pub content: String,
}

/// Ordered list of chat messages, insertion order = display order.
///
/// Append-only: the only mutation after insertion is growing the content of
/// the in-progress assistant message via [`Transcript::last_mut`].
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns its id.
    pub fn push(&mut self, role: Role, content: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            role,
            content: content.into(),
        });
        id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Message> {
        self.messages.last_mut()
    }

    /// Removes all messages. Message ids stay monotonic across clears.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
