pub mod aggregate;
pub mod session;

pub use aggregate::{ChatMessage, ChatMessageId, Sender};
pub use session::{ChatSession, PendingReply, GREETING};
