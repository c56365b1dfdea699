use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::auth::UserButton;

/// (title, when) - история пока статическая
const RECENT_CHATS: &[(&str, &str)] = &[
    ("Contract Review Discussion", "2 hours ago"),
    ("Employment Law Questions", "Yesterday"),
    ("IP Rights Consultation", "3 days ago"),
];

#[component]
pub fn ChatSidebar(on_new_chat: Callback<()>) -> impl IntoView {
    view! {
        <aside class="chat__sidebar">
            <div class="chat__sidebar-head">
                <h1 style="font-size: 18px; font-weight: 600; margin: 0;">"Legal AI Chat"</h1>
                <UserButton />
            </div>

            <div style="padding: 16px;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    attr:style="width: 100%;"
                    on_click=move |_| on_new_chat.run(())
                >
                    {icon("plus")}
                    " New Chat"
                </Button>
            </div>

            <div class="chat__history">
                <h3 style="font-size: 14px; color: var(--gray-400); margin: 0 0 12px;">"Recent Chats"</h3>
                {RECENT_CHATS
                    .iter()
                    .enumerate()
                    .map(|(idx, (title, when))| {
                        view! {
                            <div class=if idx == 0 {
                                "chat__history-item chat__history-item--active"
                            } else {
                                "chat__history-item"
                            }>
                                <div style="font-size: 14px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                    {*title}
                                </div>
                                <div style="font-size: 12px; color: var(--gray-400);">{*when}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <nav class="chat__nav">
                <A href="/dashboard">
                    <span style="display: flex; gap: 8px; align-items: center;">
                        {icon("dashboard")}
                        "Dashboard"
                    </span>
                </A>
                <A href="/">
                    <span style="display: flex; gap: 8px; align-items: center;">
                        {icon("home")}
                        "Home"
                    </span>
                </A>
            </nav>
        </aside>
    }
}
