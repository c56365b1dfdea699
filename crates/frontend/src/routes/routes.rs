use crate::dashboards::OverviewDashboard;
use crate::domain::a001_chat_message::ui::ChatPage;
use crate::domain::a002_uploaded_file::ui::UploadPage;
use crate::system::auth::{sign_in_path, use_session};
use crate::system::pages::{LandingPage, NotFoundPage, SignInPage};
use leptos::prelude::*;
use leptos_router::components::{ProtectedRoute, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let signed_in = move || Some(session.is_signed_in());
    // после входа вернуться на запрошенную страницу
    let to_sign_in = || sign_in_path(&use_location().pathname.get_untracked());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/sign-in") view=|| view! { <SignInPage /> } />
                <Route path=path!("/sign-up") view=|| view! { <SignInPage sign_up=true /> } />
                <ProtectedRoute
                    path=path!("/dashboard")
                    view=OverviewDashboard
                    condition=signed_in
                    redirect_path=to_sign_in
                />
                <ProtectedRoute
                    path=path!("/chat")
                    view=ChatPage
                    condition=signed_in
                    redirect_path=to_sign_in
                />
                <ProtectedRoute
                    path=path!("/upload")
                    view=UploadPage
                    condition=signed_in
                    redirect_path=to_sign_in
                />
            </Routes>
        </Router>
    }
}
