//! Legal chat - View Model

use contracts::domain::a001_chat_message::ChatSession;
use contracts::shared::timing::SimulationTiming;
use contracts::usecases::u501_simulated_chat::{run_reply, ReplyOutcome, SimulatedAssistant};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tokio_util::sync::CancellationToken;

use crate::shared::delay::GlooDelay;
use crate::shared::tasks::TaskScope;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub session: RwSignal<ChatSession>,
    pub input: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    timing: SimulationTiming,
    tasks: TaskScope,
    in_flight: StoredValue<Option<CancellationToken>>,
}

impl ChatVm {
    /// Must be created inside the chat component: pending replies are
    /// cancelled when it is cleaned up.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            input: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            timing: SimulationTiming::default(),
            tasks: TaskScope::new(),
            in_flight: StoredValue::new(None),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.session.with(ChatSession::is_pending)
    }

    pub fn can_send(&self) -> bool {
        !self.is_pending() && !self.input.with(|text| text.trim().is_empty())
    }

    /// Submits the input; no-op for blank input or while a reply is pending
    pub fn send(&self) {
        let text = self.input.get_untracked();
        let Some(ticket) = self.session.try_update(|s| s.submit(&text)).flatten() else {
            return;
        };
        log::debug!("chat: question submitted ({} chars)", ticket.prompt.len());
        self.input.set(String::new());
        self.error.set(None);

        let cancel = self.tasks.child();
        self.in_flight.set_value(Some(cancel.clone()));

        let session = self.session;
        let error = self.error;
        let latency = self.timing.reply_latency;
        spawn_local(async move {
            let assistant = SimulatedAssistant::new(GlooDelay, latency);
            let outcome = run_reply(&assistant, &ticket, &cancel).await;
            if let ReplyOutcome::Failed(e) = &outcome {
                let _ = error.try_set(Some(e.to_string()));
            }
            let _ = session.try_update(|s| outcome.apply_to(s, &ticket));
        });
    }

    /// "+ New Chat": drops the pending reply and starts over from the greeting
    pub fn new_chat(&self) {
        if let Some(token) = self.in_flight.try_update_value(Option::take).flatten() {
            token.cancel();
        }
        self.session.update(ChatSession::reset);
        self.input.set(String::new());
        self.error.set(None);
        log::debug!("chat: new conversation");
    }
}
