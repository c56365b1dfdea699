use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use thaw::*;

use crate::layout::LOGO_SRC;
use crate::system::auth::{after_sign_in, use_session, with_redirect, Credentials};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in to Legal Brief",
            AuthMode::SignUp => "Create your account",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in",
            AuthMode::SignUp => "Try for Free",
        }
    }
}

#[component]
pub fn SignInPage(#[prop(optional)] sign_up: bool) -> impl IntoView {
    let mode = if sign_up { AuthMode::SignUp } else { AuthMode::SignIn };
    let session = use_session();
    let navigate = use_navigate();
    let redirect = use_query_map().get_untracked().get("redirect");

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);

    // уже вошли: туда, куда шли, иначе в кабинет
    let target = after_sign_in(redirect.as_deref());
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if session.is_signed_in() {
                navigate(&target, Default::default());
            }
        }
    });
    let sign_up_href = with_redirect("/sign-up", redirect.as_deref());
    let sign_in_href = with_redirect("/sign-in", redirect.as_deref());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error_message.set(None);

        let credentials = Credentials {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let result = match mode {
            AuthMode::SignIn => session.sign_in(&credentials),
            AuthMode::SignUp => session.sign_up(&credentials),
        };
        if let Err(e) = result {
            log::debug!("{:?} rejected: {}", mode, e);
            error_message.set(Some(e));
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Card>
                    <A href="/">
                        <img src=LOGO_SRC alt="Legal Brief" height="32" />
                    </A>
                    <h2 style="margin: 16px 0 8px;">{mode.title()}</h2>

                    <Show when=move || error_message.get().is_some()>
                        <MessageBar intent=MessageBarIntent::Error>
                            <div>{move || error_message.get().unwrap_or_default()}</div>
                        </MessageBar>
                    </Show>

                    <form class="auth-form" on:submit=on_submit>
                        <Show when=move || mode == AuthMode::SignUp>
                            <div class="form-group">
                                <label for="name">"Full name"</label>
                                <input
                                    type="text"
                                    id="name"
                                    placeholder="Sarah Mitchell"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>

                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                required
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                required
                            />
                        </div>

                        <button type="submit" class="btn btn--primary" style="width: 100%; font-size: 16px;">
                            {mode.submit_label()}
                        </button>
                    </form>

                    <p class="auth-switch">
                        {match mode {
                            AuthMode::SignIn => view! {
                                "No account yet? " <A href=sign_up_href>"Sign up"</A>
                            }.into_any(),
                            AuthMode::SignUp => view! {
                                "Already registered? " <A href=sign_in_href>"Sign in"</A>
                            }.into_any(),
                        }}
                    </p>
                </Card>
            </div>
        </div>
    }
}
