use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use super::context::use_session;
use crate::shared::icons::icon;

/// Avatar with a small account menu; sign-out returns to the landing page
#[component]
pub fn UserButton() -> impl IntoView {
    let session = use_session();
    let open = RwSignal::new(false);
    let navigate = use_navigate();

    let initials = move || {
        session
            .user()
            .map(|u| u.initials())
            .unwrap_or_else(|| "?".to_string())
    };

    let sign_out = move |_: leptos::ev::MouseEvent| {
        open.set(false);
        session.sign_out();
        navigate("/", Default::default());
    };

    view! {
        <div class="user-button">
            <button
                class="user-button__avatar"
                aria-label="Account"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {initials}
            </button>
            <Show when=move || open.get()>
                <div class="user-button__menu">
                    {move || {
                        session
                            .user()
                            .map(|u| {
                                view! {
                                    <div class="user-button__name">{u.display_name.clone()}</div>
                                    <div class="user-button__email">
                                        {u.email.clone().unwrap_or_default()}
                                    </div>
                                }
                            })
                    }}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=sign_out.clone()
                    >
                        {icon("logout")}
                        " Sign out"
                    </Button>
                </div>
            </Show>
        </div>
    }
}
