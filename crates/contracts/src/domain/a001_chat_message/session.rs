//! Chat session state: the ordered message list and the single pending reply.

use super::aggregate::ChatMessage;

pub const GREETING: &str =
    "Hello! I'm your Legal AI Assistant. How can I help you with your legal questions today?";

/// Ticket for the one reply the session is waiting for.
///
/// A ticket issued before `reset()` no longer matches, so a late reply for
/// the previous conversation is dropped instead of leaking into the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    generation: u64,
    pub prompt: String,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: Option<PendingReply>,
    generation: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            pending: None,
            generation: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Appends the user's message and returns the ticket for the reply.
    ///
    /// Returns `None` (and changes nothing) for blank input or while a
    /// reply is still pending.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() || self.pending.is_some() {
            return None;
        }

        self.messages.push(ChatMessage::user(text));
        let ticket = PendingReply {
            generation: self.generation,
            prompt: text.to_string(),
        };
        self.pending = Some(ticket.clone());
        Some(ticket)
    }

    /// Appends the assistant reply for `ticket`. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: &PendingReply, content: impl Into<String>) -> bool {
        if self.pending.as_ref() != Some(ticket) {
            return false;
        }
        self.messages.push(ChatMessage::assistant(content));
        self.pending = None;
        true
    }

    /// Clears the pending flag without a reply (failed or cancelled call).
    pub fn abandon(&mut self, ticket: &PendingReply) -> bool {
        if self.pending.as_ref() != Some(ticket) {
            return false;
        }
        self.pending = None;
        true
    }

    /// "New chat": a single greeting, nothing pending.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.messages = vec![ChatMessage::assistant(GREETING)];
    }
}
