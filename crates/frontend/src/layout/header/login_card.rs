use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::system::auth::{SignedIn, SignedOut, UserButton};

/// Login / sign-up buttons for visitors, dashboard link and avatar for users
#[component]
pub fn LoginCard() -> impl IntoView {
    view! {
        <div class="login-card">
            <SignedOut>
                <A href="/sign-in">
                    <Button appearance=ButtonAppearance::Transparent>"Login"</Button>
                </A>
                <A href="/sign-up">
                    <Button appearance=ButtonAppearance::Primary>"Try for Free"</Button>
                </A>
            </SignedOut>
            <SignedIn>
                <A href="/dashboard">
                    <span class="site-header__link">"Dashboard"</span>
                </A>
                <UserButton />
            </SignedIn>
        </div>
    }
}
