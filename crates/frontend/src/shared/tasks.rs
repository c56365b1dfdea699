//! Cancellation scope for the timer-driven tasks a screen starts.

use leptos::prelude::*;
use tokio_util::sync::CancellationToken;

/// Root token owned by the current component.
///
/// Every task gets a child token; the root is cancelled when the owning
/// component is cleaned up, so no timer outlives its screen.
#[derive(Clone, Copy)]
pub struct TaskScope {
    root: StoredValue<CancellationToken>,
}

impl TaskScope {
    pub fn new() -> Self {
        let root = CancellationToken::new();
        on_cleanup({
            let root = root.clone();
            move || {
                log::debug!("task scope cleaned up, cancelling pending work");
                root.cancel();
            }
        });
        Self {
            root: StoredValue::new(root),
        }
    }

    pub fn child(&self) -> CancellationToken {
        self.root
            .try_with_value(CancellationToken::child_token)
            // владелец уже уничтожен: задача не должна стартовать
            .unwrap_or_else(|| {
                let token = CancellationToken::new();
                token.cancel();
                token
            })
    }
}
