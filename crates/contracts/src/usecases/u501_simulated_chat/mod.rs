//! Simulated legal assistant: canned reply after a fixed delay.

pub mod assistant;
pub mod runner;

pub use assistant::{compose_reply, AssistantError, LegalAssistant, SimulatedAssistant};
pub use runner::{run_reply, ReplyOutcome};
