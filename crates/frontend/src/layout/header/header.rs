use leptos::prelude::*;
use leptos_router::components::A;

use super::login_card::LoginCard;
use crate::layout::LOGO_SRC;
use crate::system::pages::landing_content::NAV_ANCHORS;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav data-zone="header" class="site-header">
            <div class="container site-header__content">
                <A href="/">
                    <img src=LOGO_SRC alt="logo" height="32" />
                </A>
                <div class="site-header__nav">
                    // якоря ведут на секции главной страницы
                    {NAV_ANCHORS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a class="site-header__link" href=format!("/{}", href)>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <LoginCard />
            </div>
        </nav>
    }
}
