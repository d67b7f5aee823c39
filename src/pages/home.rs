use log::info;
use serde_json::json;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::analytics;
use crate::Route;
use crate::components::reveal::init_scroll_reveal;
use crate::scroll_to_section;

fn track_store_click(store: &str) {
    gloo_console::log!("store badge clicked:", store);
    analytics::with_session(|analytics| {
        analytics.record("store_button_clicked", json!({ "store": store }));
    });
}

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Which form on the page collected the address ("signup", "footer", ..).
    pub source: AttrValue,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let address = use_state(String::new);
    let status = use_state(|| None::<Result<String, String>>);
    let is_loading = use_state(|| false);

    let oninput = {
        let address = address.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            address.set(input.value());
        })
    };

    let onsubmit = {
        let address = address.clone();
        let status = status.clone();
        let is_loading = is_loading.clone();
        let source = props.source.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let entered = address.trim().to_string();
            if entered.is_empty() || !entered.contains('@') {
                status.set(Some(Err("Please enter a valid email address.".to_string())));
                return;
            }

            is_loading.set(true);
            let address = address.clone();
            let status = status.clone();
            let is_loading = is_loading.clone();
            let source = source.clone();
            spawn_local(async move {
                let response = crate::email::subscribe(&entered, source.as_str()).await;
                is_loading.set(false);
                if response.success {
                    address.set(String::new());
                    status.set(Some(Ok(
                        "You're on the list. See you at the park.".to_string()
                    )));
                } else {
                    status.set(Some(Err(
                        "Something went wrong. Please try again.".to_string()
                    )));
                }
            });
        })
    };

    html! {
        <form class="signup-form" {onsubmit}>
            <div class="signup-row">
                <input
                    type="email"
                    placeholder="you@example.com"
                    value={(*address).clone()}
                    {oninput}
                />
                <button type="submit" disabled={*is_loading}>
                    { if *is_loading { "Joining..." } else { "Join the waitlist" } }
                </button>
            </div>
            {
                match &*status {
                    Some(Ok(message)) => html! { <p class="signup-status ok">{message.clone()}</p> },
                    Some(Err(message)) => html! { <p class="signup-status err">{message.clone()}</p> },
                    None => html! {},
                }
            }
        </form>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                info!("Landing page mounted");
                // Page analytics are wired once at startup in main(); a
                // remount only needs the reveal observer re-attached to the
                // freshly rendered sections.
                init_scroll_reveal();
                || ()
            },
            (),
        );
    }

    let on_hero_cta = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        analytics::with_session(|analytics| {
            analytics.record("cta_clicked", json!({ "location": "hero" }));
        });
        scroll_to_section("signup");
    });

    let on_app_store = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        track_store_click("app_store");
    });
    let on_google_play = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        track_store_click("google_play");
    });

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>

            <header class="hero" id="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Master Your Body."}<br/>{"Own Your Streets."}</h1>
                    <p class="hero-subtitle">
                        {"GRIP maps every pull-up bar, parallel bar and outdoor gym around you, \
                          and turns street workouts into a progression you can actually follow."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={on_hero_cta}>{"Get early access"}</button>
                        <div class="store-badges">
                            <a href="#" class="store-badge" onclick={on_app_store.clone()}>
                                {"App Store"}
                            </a>
                            <a href="#" class="store-badge" onclick={on_google_play.clone()}>
                                {"Google Play"}
                            </a>
                        </div>
                    </div>
                </div>
            </header>

            <section class="features" id="features">
                <h2>{"Everything a street athlete needs"}</h2>
                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>{"Spot map"}</h3>
                        <p>{"Community-mapped bars, rings and calisthenics parks in 40+ cities, \
                             with photos and equipment lists."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Progressions"}</h3>
                        <p>{"From your first pull-up to the planche: step-by-step skill trees \
                             that meet you where you are."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Workout log"}</h3>
                        <p>{"Sets, holds and streaks tracked offline-first, synced when you're \
                             back on the grid."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Crews"}</h3>
                        <p>{"Find the people training at your spot and never do a session \
                             alone again."}</p>
                    </div>
                </div>
            </section>

            <section class="how-it-works" id="how-it-works">
                <h2>{"How it works"}</h2>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">{"1"}</span>
                        <h3>{"Find a spot"}</h3>
                        <p>{"Open the map and pick a bar near you."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"2"}</span>
                        <h3>{"Pick a progression"}</h3>
                        <p>{"Choose a skill and GRIP builds the session."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"3"}</span>
                        <h3>{"Train and log"}</h3>
                        <p>{"Tick off sets as you go, even without signal."}</p>
                    </div>
                </div>
            </section>

            <section class="spots" id="spots">
                <h2>{"Fresh spots this week"}</h2>
                <div class="spot-grid">
                    <div class="spot-card">
                        <h3>{"Görlitzer Park"}</h3>
                        <p>{"Berlin · high bars, dip station, rings"}</p>
                    </div>
                    <div class="spot-card">
                        <h3>{"Pier 46"}</h3>
                        <p>{"New York · full outdoor gym by the river"}</p>
                    </div>
                    <div class="spot-card">
                        <h3>{"Kenington Park"}</h3>
                        <p>{"London · classic bar park, floodlit"}</p>
                    </div>
                </div>
            </section>

            <section class="testimonials" id="testimonials">
                <h2>{"From the bars"}</h2>
                <div class="testimonial-grid">
                    <div class="testimonial-card">
                        <p>{"\"Went from zero to five strict muscle-ups following the tree. \
                             The spot map found me a park two blocks from work.\""}</p>
                        <span>{"— Mara, Berlin"}</span>
                    </div>
                    <div class="testimonial-card">
                        <p>{"\"Finally an app that gets that we train outside, in winter, \
                             with gloves on.\""}</p>
                        <span>{"— Deshawn, Chicago"}</span>
                    </div>
                    <div class="testimonial-card">
                        <p>{"\"Our whole crew logs on GRIP now. The streak shaming is real.\""}</p>
                        <span>{"— Tomek, Warsaw"}</span>
                    </div>
                </div>
            </section>

            <section class="stats-band">
                <div class="stat">
                    <span class="stat-value">{"12k"}</span>
                    <span class="stat-label">{"athletes on the waitlist"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{"3,400"}</span>
                    <span class="stat-label">{"spots mapped"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{"40+"}</span>
                    <span class="stat-label">{"cities"}</span>
                </div>
            </section>

            <section class="signup" id="signup">
                <h2>{"Be first on the bar"}</h2>
                <p>{"Early access rolls out city by city. Leave your email and we'll ping you \
                     when GRIP reaches yours."}</p>
                <SignupForm source="signup" />
            </section>

            <footer class="footer">
                <div class="footer-inner">
                    <span class="footer-logo">{"GRIP"}</span>
                    <div class="store-badges">
                        <a href="#" class="store-badge" onclick={on_app_store}>{"App Store"}</a>
                        <a href="#" class="store-badge" onclick={on_google_play}>{"Google Play"}</a>
                    </div>
                    <SignupForm source="footer" />
                    <div class="footer-links">
                        <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                        <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                    </div>
                </div>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    background: #0d0d0f;
    color: #f5f5f5;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.landing-page section {
    padding: 5rem 2rem;
    max-width: 1100px;
    margin: 0 auto;
}
.landing-page h2 {
    font-size: 2.4rem;
    text-align: center;
    margin-bottom: 2.5rem;
    background: linear-gradient(135deg, #2563EB, #F97316);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero {
    min-height: 90vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 6rem 2rem 4rem;
    background: radial-gradient(circle at top, rgba(37, 99, 235, 0.25), transparent 60%);
}
.hero-title {
    font-size: 3.4rem;
    line-height: 1.1;
    margin-bottom: 1.2rem;
}
.hero-subtitle {
    color: #bbb;
    font-size: 1.2rem;
    max-width: 560px;
    margin: 0 auto 2rem;
}
.hero-cta {
    background: linear-gradient(135deg, #2563EB, #F97316);
    border: none;
    color: white;
    font-size: 1.1rem;
    font-weight: 600;
    padding: 0.9rem 2.2rem;
    border-radius: 10px;
    cursor: pointer;
}
.store-badges {
    display: flex;
    gap: 1rem;
    justify-content: center;
    margin-top: 1.5rem;
}
.store-badge {
    border: 1px solid rgba(255, 255, 255, 0.25);
    border-radius: 8px;
    padding: 0.6rem 1.2rem;
    color: #ddd;
    text-decoration: none;
    font-size: 0.95rem;
}
.feature-grid, .spot-grid, .testimonial-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
    gap: 1.5rem;
}
.feature-card, .spot-card, .testimonial-card, .step {
    background: rgba(30, 30, 34, 0.8);
    border: 1px solid rgba(37, 99, 235, 0.15);
    border-radius: 14px;
    padding: 1.8rem;
}
.steps {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1.5rem;
}
.step-number {
    display: inline-block;
    width: 2rem;
    height: 2rem;
    line-height: 2rem;
    text-align: center;
    border-radius: 50%;
    background: #2563EB;
    font-weight: 700;
    margin-bottom: 0.8rem;
}
.testimonial-card span {
    display: block;
    margin-top: 1rem;
    color: #999;
}
.stats-band {
    display: flex;
    justify-content: space-around;
    flex-wrap: wrap;
    gap: 2rem;
    text-align: center;
}
.stat-value {
    display: block;
    font-size: 2.6rem;
    font-weight: 700;
    color: #F97316;
}
.stat-label {
    color: #999;
}
.signup {
    text-align: center;
}
.signup p {
    color: #bbb;
    max-width: 520px;
    margin: 0 auto 2rem;
}
.signup-row {
    display: flex;
    gap: 0.8rem;
    justify-content: center;
    flex-wrap: wrap;
}
.signup-form input {
    background: rgba(255, 255, 255, 0.08);
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 8px;
    padding: 0.8rem 1rem;
    color: white;
    min-width: 260px;
    font-size: 1rem;
}
.signup-form button {
    background: #F97316;
    border: none;
    border-radius: 8px;
    color: white;
    font-weight: 600;
    padding: 0.8rem 1.6rem;
    cursor: pointer;
}
.signup-form button:disabled {
    opacity: 0.6;
    cursor: wait;
}
.signup-status.ok { color: #4ade80; margin-top: 1rem; }
.signup-status.err { color: #f87171; margin-top: 1rem; }
.footer {
    border-top: 1px solid rgba(255, 255, 255, 0.08);
    padding: 3rem 2rem;
    text-align: center;
}
.footer-logo {
    font-size: 1.6rem;
    font-weight: 800;
    letter-spacing: 0.2em;
}
.footer-inner {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    align-items: center;
}
.footer-links a {
    color: #888;
    margin: 0 0.8rem;
    text-decoration: none;
}
.animate-on-scroll {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
.animate-on-scroll.visible {
    opacity: 1;
    transform: translateY(0);
}
@media (max-width: 768px) {
    .hero-title { font-size: 2.4rem; }
    .landing-page section { padding: 3.5rem 1.2rem; }
}
"#;
