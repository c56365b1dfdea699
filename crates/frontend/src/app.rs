use crate::routes::routes::AppRoutes;
use crate::system::auth::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            // Session is provided once at the root and read with use_session()
            <SessionProvider>
                <AppRoutes />
            </SessionProvider>
        </ConfigProvider>
    }
}
