use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// ID сообщения чата
    ChatMessageId
);

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }

    /// Short label rendered in the avatar bubble
    pub fn avatar_label(&self) -> &'static str {
        match self {
            Sender::User => "U",
            Sender::Assistant => "AI",
        }
    }
}

/// Сообщение чата. Создаётся один раз и больше не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: ChatMessageId::new_v4(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content)
    }

    /// Time of day in the viewer's local timezone, e.g. `14:05`
    pub fn time_label(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}
