use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::shared::delay::Delay;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("assistant is unavailable: {0}")]
    Unavailable(String),
}

/// Source of assistant replies. The shipped implementation is simulated.
pub trait LegalAssistant {
    fn reply(&self, prompt: &str) -> impl Future<Output = Result<String, AssistantError>>;
}

/// Boilerplate answer with the user's question quoted into it
pub fn compose_reply(prompt: &str) -> String {
    format!(
        "I understand you're asking about \"{prompt}\". This appears to be a legal matter \
         that may involve contract law, employment rights, or regulatory compliance. \
         Let me provide you with some preliminary guidance:\n\n\
         • First, consider the jurisdiction and applicable laws\n\
         • Review any relevant documentation or contracts\n\
         • Consider consulting with a qualified attorney for complex matters\n\n\
         Would you like me to elaborate on any specific aspect of this legal question?"
    )
}

/// Answers every prompt with [`compose_reply`] after a fixed latency
pub struct SimulatedAssistant<D> {
    delay: D,
    latency: Duration,
}

impl<D: Delay> SimulatedAssistant<D> {
    pub fn new(delay: D, latency: Duration) -> Self {
        Self { delay, latency }
    }
}

impl<D: Delay> LegalAssistant for SimulatedAssistant<D> {
    async fn reply(&self, prompt: &str) -> Result<String, AssistantError> {
        self.delay.sleep(self.latency).await;
        Ok(compose_reply(prompt))
    }
}
