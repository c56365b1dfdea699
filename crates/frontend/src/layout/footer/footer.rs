use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "All systems operational",
            ServerStatus::Offline => "Service unreachable",
            ServerStatus::Checking => "Checking status...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Проверяем сервер при монтировании
    Effect::new(move |_| {
        spawn_local(async move {
            let online = ping_server().await;
            let _ = status.try_set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    let year = chrono::Local::now().year();

    view! {
        <footer id="contact" data-zone="footer" class="site-footer">
            <div class="container">
                <div class="site-footer__grid">
                    <div>
                        <div class="site-footer__title">"Legal Brief"</div>
                        <p>"Your personal Legal AI Assistant. Summaries, analysis and answers in seconds."</p>
                    </div>
                    <div>
                        <div class="site-footer__title">"Product"</div>
                        <p><A href="/upload">"Document Analysis"</A></p>
                        <p><A href="/chat">"Ask AI Lawyer"</A></p>
                        <p><A href="/dashboard">"Dashboard"</A></p>
                    </div>
                    <div>
                        <div class="site-footer__title">"Contact"</div>
                        <p>"support@legalbrief.app"</p>
                    </div>
                </div>
                <div class="site-footer__bottom">
                    <span>{format!("© {} Legal Brief. Not a substitute for a qualified attorney.", year)}</span>
                    <span class=move || status.get().css_class()>
                        {move || status.get().display_text()}
                    </span>
                </div>
            </div>
        </footer>
    }
}

/// Same-origin health check of the site host
async fn ping_server() -> bool {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return false,
    };

    let request = match web_sys::Request::new_with_str("/health") {
        Ok(r) => r,
        Err(_) => return false,
    };

    let promise = window.fetch_with_request(&request);
    let response = match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(r) => r,
        Err(_) => return false,
    };

    let response: web_sys::Response = match response.dyn_into() {
        Ok(r) => r,
        Err(_) => return false,
    };

    response.ok()
}
