use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

use crate::components::counter::StatCounter;
use crate::components::reveal::Reveal;
use crate::components::slideshow::{HeroSlideshow, SlideItem};
use crate::utils::scroll;
use crate::Route;

fn hero_slides() -> Vec<SlideItem> {
    vec![
        SlideItem {
            heading: "Know before you fly",
            caption: "Forecast arrival delays for any US route before you book.",
            backdrop: "linear-gradient(135deg, #101a33, #1d3a6e)",
        },
        SlideItem {
            heading: "Built on real arrival data",
            caption: "Carrier and airport history, weather and airspace congestion, all in one model.",
            backdrop: "linear-gradient(135deg, #0c2230, #155e75)",
        },
        SlideItem {
            heading: "Minutes, not guesses",
            caption: "Every prediction is broken down by cause, from late aircraft to security holds.",
            backdrop: "linear-gradient(135deg, #1a1033, #4c1d95)",
        },
    ]
}

fn anchor(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_fragment(href);
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigator = use_navigator();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_fab = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Input);
        } else if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/input");
        }
    });

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <nav class="top-nav">
                <Link<Route> to={Route::Landing} classes="nav-logo">{"DelayCast"}</Link<Route>>
                <div class="nav-links">
                    <a href="#features" onclick={anchor("#features")}>{"Features"}</a>
                    <a href="#stats" onclick={anchor("#stats")}>{"Coverage"}</a>
                    <a href="#results" onclick={anchor("#results")}>{"Results"}</a>
                    <Link<Route> to={Route::Input} classes="nav-cta">{"Predict a flight"}</Link<Route>>
                </div>
            </nav>

            <header class="hero">
                <HeroSlideshow slides={hero_slides()} />
            </header>

            <section id="features" class="features-section">
                <h2>{"What DelayCast looks at"}</h2>
                <div class="card-grid">
                    <Reveal class="feature-card">
                        <i class="fas fa-plane-departure"></i>
                        <h3>{"Carrier-aware forecasts"}</h3>
                        <p>{"Each airline has its own delay fingerprint. The model learns it from years of arrival records."}</p>
                    </Reveal>
                    <Reveal class="feature-card">
                        <i class="fas fa-cloud-showers-heavy"></i>
                        <h3>{"Cause breakdown"}</h3>
                        <p>{"Weather, airspace congestion, security and late-aircraft delays are predicted separately, not lumped together."}</p>
                    </Reveal>
                    <Reveal class="feature-card">
                        <i class="fas fa-chart-line"></i>
                        <h3>{"Route history at a glance"}</h3>
                        <p>{"Monthly arrival volumes and cancellation rates for the airport you are flying into."}</p>
                    </Reveal>
                </div>
            </section>

            <section id="stats" class="stats-section">
                <h2>{"Coverage"}</h2>
                <div class="card-grid">
                    <Reveal>
                        <StatCounter target={250} label="Airports covered" />
                    </Reveal>
                    <Reveal>
                        <StatCounter target={28} label="Carriers tracked" />
                    </Reveal>
                    <Reveal>
                        <StatCounter target={96} suffix="%" label="Forecasts within 15 minutes" />
                    </Reveal>
                </div>
            </section>

            <section id="results" class="results-section">
                <h2>{"Recent sample forecasts"}</h2>
                <div class="card-grid">
                    <Reveal class="result-card">
                        <h3>{"ORD \u{2192} DEN, December"}</h3>
                        <p class="result-delay">{"+41 min"}</p>
                        <p>{"Mostly late-aircraft knock-on; weather contributes 9 minutes."}</p>
                    </Reveal>
                    <Reveal class="result-card">
                        <h3>{"SEA \u{2192} SFO, July"}</h3>
                        <p class="result-delay">{"+12 min"}</p>
                        <p>{"Morning fog at SFO dominates; carrier effects negligible."}</p>
                    </Reveal>
                    <Reveal class="result-card">
                        <h3>{"ATL \u{2192} MCO, March"}</h3>
                        <p class="result-delay">{"+6 min"}</p>
                        <p>{"High-volume route, but spring traffic keeps the airspace clear."}</p>
                    </Reveal>
                </div>
            </section>

            <footer class="landing-footer">
                <p>{"DelayCast - arrival delay forecasts from historical airline on-time data."}</p>
            </footer>

            <button class="floating-action" onclick={on_fab} aria-label="Predict a flight">
                <i class="fas fa-plane"></i>
            </button>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .top-nav {
        position: sticky;
        top: 0;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 2rem;
        background: rgba(15, 20, 32, 0.9);
        backdrop-filter: blur(6px);
        z-index: 10;
    }
    .nav-logo {
        font-size: 1.3rem;
        font-weight: 700;
        color: #7eb2ff;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .nav-links a {
        color: #cfd8e3;
        font-size: 0.95rem;
    }
    .nav-cta {
        padding: 0.5rem 1rem;
        border-radius: 8px;
        background: #2563eb;
        color: #fff !important;
    }
    .hero {
        position: relative;
        overflow: hidden;
    }
    section {
        padding: 4rem 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    section h2 {
        text-align: center;
        font-size: 2rem;
        margin-bottom: 2.5rem;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
    }
    .feature-card, .result-card {
        background: rgba(30, 40, 60, 0.7);
        border: 1px solid rgba(126, 178, 255, 0.15);
        border-radius: 12px;
        padding: 1.6rem;
    }
    .feature-card i {
        font-size: 1.8rem;
        color: #7eb2ff;
    }
    .feature-card p, .result-card p {
        color: #b6c2d2;
        line-height: 1.5;
    }
    .result-delay {
        font-size: 1.8rem;
        font-weight: 700;
        color: #f59e0b !important;
        margin: 0.4rem 0;
    }
    .stat-item {
        background: rgba(30, 40, 60, 0.7);
        border: 1px solid rgba(126, 178, 255, 0.15);
        border-radius: 12px;
        padding: 1.8rem;
        text-align: center;
        display: flex;
        flex-direction: column;
        gap: 0.4rem;
    }
    .stat-number {
        font-size: 2.4rem;
        font-weight: 700;
        color: #7eb2ff;
    }
    .stat-label {
        color: #b6c2d2;
    }
    .landing-footer {
        padding: 2rem;
        text-align: center;
        color: #7e8aa0;
        border-top: 1px solid rgba(126, 178, 255, 0.1);
    }
    .floating-action {
        position: fixed;
        bottom: 1.6rem;
        right: 1.6rem;
        width: 56px;
        height: 56px;
        border-radius: 50%;
        border: none;
        background: #2563eb;
        color: #fff;
        font-size: 1.3rem;
        cursor: pointer;
        box-shadow: 0 10px 24px rgba(37, 99, 235, 0.4);
        z-index: 20;
    }
    @media (max-width: 600px) {
        .nav-links a:not(.nav-cta) { display: none; }
        section { padding: 3rem 1rem; }
    }
"#;
