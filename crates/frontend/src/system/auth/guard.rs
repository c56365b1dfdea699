use leptos::prelude::*;

use super::context::use_session;

/// Renders children only for a signed-in visitor
#[component]
pub fn SignedIn(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.is_signed_in()>
            {children()}
        </Show>
    }
}

/// Renders children only for an anonymous visitor
#[component]
pub fn SignedOut(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || !session.is_signed_in()>
            {children()}
        </Show>
    }
}
