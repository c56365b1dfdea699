use tokio_util::sync::CancellationToken;

use super::assistant::{AssistantError, LegalAssistant};
use crate::domain::a001_chat_message::{ChatSession, PendingReply};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Replied(String),
    Failed(AssistantError),
    Cancelled,
}

impl ReplyOutcome {
    /// Writes the outcome into the session the ticket was issued by.
    ///
    /// Returns `true` if the session changed.
    pub fn apply_to(self, session: &mut ChatSession, ticket: &PendingReply) -> bool {
        match self {
            ReplyOutcome::Replied(content) => session.complete(ticket, content),
            ReplyOutcome::Failed(_) | ReplyOutcome::Cancelled => session.abandon(ticket),
        }
    }
}

/// Waits for the assistant's answer to `ticket`, or for `cancel`.
pub async fn run_reply<A: LegalAssistant>(
    assistant: &A,
    ticket: &PendingReply,
    cancel: &CancellationToken,
) -> ReplyOutcome {
    match cancel.run_until_cancelled(assistant.reply(&ticket.prompt)).await {
        Some(Ok(content)) => ReplyOutcome::Replied(content),
        Some(Err(e)) => {
            log::warn!("assistant reply failed: {}", e);
            ReplyOutcome::Failed(e)
        }
        None => {
            log::debug!("assistant reply cancelled");
            ReplyOutcome::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_chat_message::Sender;
    use crate::shared::test_utils::TokioDelay;
    use crate::usecases::u501_simulated_chat::assistant::SimulatedAssistant;
    use std::future::Future;
    use std::time::Duration;
    use tokio::time::Instant;

    const LATENCY: Duration = Duration::from_millis(1500);

    struct BrokenAssistant;

    impl LegalAssistant for BrokenAssistant {
        fn reply(&self, _prompt: &str) -> impl Future<Output = Result<String, AssistantError>> {
            std::future::ready(Err(AssistantError::Unavailable("503".into())))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_latency() {
        let assistant = SimulatedAssistant::new(TokioDelay, LATENCY);
        let mut session = ChatSession::new();
        let ticket = session.submit("What is a force majeure clause?").unwrap();
        assert_eq!(session.messages().len(), 2);

        let started = Instant::now();
        let outcome = run_reply(&assistant, &ticket, &CancellationToken::new()).await;
        assert!(started.elapsed() >= LATENCY);

        assert!(outcome.apply_to(&mut session, &ticket));
        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].sender, Sender::Assistant);
        assert!(messages[2]
            .content
            .contains("\"What is a force majeure clause?\""));
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_reply_appends_nothing() {
        let assistant = SimulatedAssistant::new(TokioDelay, LATENCY);
        let mut session = ChatSession::new();
        let ticket = session.submit("question").unwrap();

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            trigger.cancel();
        });

        let started = Instant::now();
        let outcome = run_reply(&assistant, &ticket, &cancel).await;
        assert_eq!(outcome, ReplyOutcome::Cancelled);
        assert!(started.elapsed() < LATENCY);

        outcome.apply_to(&mut session, &ticket);
        assert_eq!(session.messages().len(), 2);
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_failed_reply_unblocks_session() {
        let mut session = ChatSession::new();
        let ticket = session.submit("question").unwrap();

        let outcome = run_reply(&BrokenAssistant, &ticket, &CancellationToken::new()).await;
        assert!(matches!(outcome, ReplyOutcome::Failed(_)));

        outcome.apply_to(&mut session, &ticket);
        assert_eq!(session.messages().len(), 2);
        assert!(session.submit("again").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_for_reset_session_is_dropped() {
        let assistant = SimulatedAssistant::new(TokioDelay, LATENCY);
        let mut session = ChatSession::new();
        let ticket = session.submit("old question").unwrap();

        let outcome = run_reply(&assistant, &ticket, &CancellationToken::new()).await;
        session.reset();

        assert!(!outcome.apply_to(&mut session, &ticket));
        assert_eq!(session.messages().len(), 1);
    }
}
