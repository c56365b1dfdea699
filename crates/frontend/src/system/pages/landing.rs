use leptos::prelude::*;
use leptos_router::components::A;

use super::landing_content::{
    Tile, AUDIENCES, BENEFITS, CTA_CHECKS, FEATURES, HERO_CHECKS, TESTIMONIALS,
};
use crate::layout::{Footer, Header};

fn tile_view(tile: &'static Tile) -> impl IntoView {
    view! {
        <div class=format!("tile {}", tile.tone)>
            <div class="tile__icon">{tile.icon}</div>
            <h3 class="tile__title">{tile.title}</h3>
            <p class="tile__text">{tile.text}</p>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero__grid">
                <div>
                    <h1 class="hero__title">
                        "Your Personal"
                        <span>"Legal AI Assistant"</span>
                    </h1>
                    <p class="hero__lead">
                        "Say goodbye to expensive legal consultation, long waits for appointments, \
                         and confusing legal texts. Summarize complex legal documents in seconds \
                         with AI-powered precision."
                    </p>
                    <div class="hero__actions">
                        <A href="/sign-up">
                            <span class="btn btn--primary">"Start Free Trial"</span>
                        </A>
                        <button class="btn btn--outline">"Watch Demo"</button>
                    </div>
                    <div class="hero__checks">
                        {HERO_CHECKS
                            .iter()
                            .map(|text| view! { <span><span class="check">"✓"</span>{*text}</span> })
                            .collect_view()}
                    </div>
                </div>
                <div class="drop-prompt">
                    <A href="/upload">
                        <div class="drop-prompt__zone">
                            <div style="font-size: 36px;">"📄"</div>
                            <p style="color: var(--gray-600);">"Drop your legal document here"</p>
                            <div class="drop-prompt__file">
                                <div style="font-weight: 500;">"contract_agreement.pdf"</div>
                                <div style="font-size: 12px;">"2.4MB • Processing..."</div>
                            </div>
                            <div class="progress">
                                <div class="progress__bar" style="width: 75%;"></div>
                            </div>
                        </div>
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Header />
        <Hero />

        <section id="features" class="section">
            <div class="container">
                <div class="section__head">
                    <h2 class="section__title">"Features of Legal AI"</h2>
                    <p class="section__lead">
                        "Explore features that boost your productivity. From document automation \
                         to advanced research, we've got the hard work covered."
                    </p>
                </div>
                <div class="grid grid--3">
                    {FEATURES.iter().map(tile_view).collect_view()}
                </div>
            </div>
        </section>

        <section id="benefits" class="section section--muted">
            <div class="container">
                <div class="section__head">
                    <h2 class="section__title">"Why Our AI in Law is Better?"</h2>
                    <p class="section__lead">
                        "In contrast to others, our LegalTech software is quick, easy, and wallet-friendly."
                    </p>
                </div>
                <div class="grid grid--4">
                    {BENEFITS
                        .iter()
                        .map(|b| {
                            view! {
                                <div class="benefit">
                                    <div class="benefit__badge">{b.icon}</div>
                                    <h3 class="tile__title">{b.title}</h3>
                                    <p class="tile__text">{b.text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="section__head">
                    <h2 class="section__title">"Who is Legal AI For?"</h2>
                    <p class="section__lead">
                        "Whether you're a consumer, a student, a solo lawyer, or a full law firm - \
                         Legal AI adapts to your legal needs and boosts your productivity."
                    </p>
                </div>
                <div class="grid grid--4" style="text-align: center;">
                    {AUDIENCES.iter().map(tile_view).collect_view()}
                </div>
            </div>
        </section>

        <section id="testimonials" class="section section--muted">
            <div class="container">
                <div class="section__head">
                    <h2 class="section__title">"What Our Users Think"</h2>
                    <p class="section__lead">
                        "Find out how our platform has changed the legal services experience for diverse users."
                    </p>
                </div>
                <div class="grid grid--3">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="testimonial">
                                    <div class="testimonial__author">
                                        <div class=format!("testimonial__avatar {}", t.tone)>{t.avatar}</div>
                                        <div>
                                            <h4 style="margin: 0;">{t.name}</h4>
                                            <p class="testimonial__role">{t.role}</p>
                                        </div>
                                    </div>
                                    <p class="tile__text">{format!("\"{}\"", t.quote)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="cta">
            <div class="container" style="max-width: 896px;">
                <h2 class="section__title">"Legal AI Protects Your Rights and Wallet"</h2>
                <p class="cta__lead">
                    "Join thousands of legal professionals who trust our AI to streamline their \
                     workflow and deliver better results."
                </p>
                <div class="hero__actions" style="justify-content: center;">
                    <A href="/sign-up">
                        <span class="btn btn--white">"Start Free Trial"</span>
                    </A>
                    <button class="btn btn--ghost-white">"Schedule Demo"</button>
                </div>
                <div class="cta__checks">
                    {CTA_CHECKS
                        .iter()
                        .map(|text| view! { <span><span class="check">"✓"</span>{*text}</span> })
                        .collect_view()}
                </div>
            </div>
        </section>

        <Footer />
    }
}
