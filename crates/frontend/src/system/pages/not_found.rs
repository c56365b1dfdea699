use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::{Footer, Header};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Header />
        <main class="container page" style="text-align: center; min-height: 50vh;">
            <h1 class="page__title">"Page not found"</h1>
            <p class="page__lead">"The page you are looking for does not exist."</p>
            <A href="/">
                <span class="btn btn--primary" style="margin-top: 24px;">"Back to home"</span>
            </A>
        </main>
        <Footer />
    }
}
