use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::dashboards::d400_overview::cards::{ACTION_CARDS, STATS};
use crate::layout::{Footer, Header};
use crate::system::auth::use_session;

/// Overview dashboard component
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .user()
            .map(|u| format!("Welcome back, {}", u.first_name()))
            .unwrap_or_else(|| "Welcome to your Legal AI Assistant".to_string())
    };

    view! {
        <Header />
        <main class="container page">
            <div style="margin-bottom: 32px;">
                <h1 class="page__title">"Dashboard"</h1>
                <p class="page__lead">{greeting}</p>
            </div>

            <div class="grid grid--3" style="gap: 24px;">
                {ACTION_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <Card>
                                <div style=format!("font-size: 24px; color: {};", card.color)>
                                    {card.icon}
                                </div>
                                <h3 class="tile__title">{card.title}</h3>
                                <p class="tile__text">{card.text}</p>
                                <A href=card.href>
                                    <span
                                        class="btn"
                                        style=format!(
                                            "display: block; font-size: 15px; padding: 8px 16px; color: #fff; background: {};",
                                            card.color,
                                        )
                                    >
                                        {card.action}
                                    </span>
                                </A>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid grid--4" style="margin-top: 48px; gap: 24px;">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <div class="stat__value" style=format!("color: {};", stat.color)>
                                    {stat.value}
                                </div>
                                <div class="stat__label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </main>
        <Footer />
    }
}
