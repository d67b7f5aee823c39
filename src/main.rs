use gloo_timers::callback::Interval;
use log::{info, Level};
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_router::prelude::*;

use milestones::{
    scroll_percent, DwellTracker, ScrollDepthTracker, ScrollNotification, DWELL_INTERVAL_SECS,
};

mod analytics;
mod config;
mod email;
mod milestones;
mod components {
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use pages::home::Home;
use pages::termsprivacy::{PrivacyPolicy, TermsAndConditions};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

/// Record `page_view` and install the scroll-depth listener and the dwell
/// timer. Called once per browser page load, before the app renders; the
/// listeners deliberately outlive route changes so every milestone fires at
/// most once per visit no matter how often the landing page remounts.
fn init_page_analytics() {
    analytics::with_session(|analytics| {
        let (title, referrer) = match window().and_then(|w| w.document()) {
            Some(document) => (document.title(), document.referrer()),
            None => (String::new(), String::new()),
        };
        analytics.record("page_view", json!({ "title": title, "referrer": referrer }));
    });

    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    let mut scroll_tracker = ScrollDepthTracker::new();
    let scroll_callback = Closure::<dyn FnMut()>::new(move || {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|d| d.body())
            .map(|body| body.scroll_height() as f64)
            .unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        let percent = match scroll_percent(scroll_y, document_height, viewport_height) {
            Some(percent) => percent,
            None => return, // nothing to scroll
        };
        for depth in scroll_tracker.observe(ScrollNotification { percent }) {
            analytics::with_session(|analytics| {
                analytics.record("scroll_depth", json!({ "depth": depth }));
            });
        }
    });
    let _ = window
        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
    scroll_callback.forget();

    let mut dwell_tracker = DwellTracker::new();
    Interval::new(DWELL_INTERVAL_SECS * 1000, move || {
        if let Some(tick) = dwell_tracker.advance(DWELL_INTERVAL_SECS) {
            analytics::with_session(|analytics| {
                analytics.record("time_on_page", json!({ "seconds": tick.elapsed_seconds }));
            });
        }
    })
    .forget();
}

/// Smooth-scroll to a section of the landing page by element id.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(target) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Section anchors only exist on the landing route; everywhere else the nav
/// falls back to router links.
fn section_links_enabled(route: Option<&Route>) -> bool {
    matches!(route, None | Some(Route::Home))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let scroll_callback = Closure::wrap(Box::new({
                    let window = window.clone();
                    move || {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(offset > 50.0);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    // Nav links close the menu and glide to their section.
    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"GRIP"}
                    </Link<Route>>
                </div>

                <button class={classes!("burger-menu", (*menu_open).then(|| "active"))}
                        onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        if section_links_enabled(route.as_ref()) {
                            html! {
                                <>
                                    <a class="nav-link" href="#features" onclick={go_to("features")}>
                                        {"Features"}
                                    </a>
                                    <a class="nav-link" href="#how-it-works" onclick={go_to("how-it-works")}>
                                        {"How it works"}
                                    </a>
                                    <a class="nav-link" href="#spots" onclick={go_to("spots")}>
                                        {"Spots"}
                                    </a>
                                    <a class="nav-cta" href="#signup" onclick={go_to("signup")}>
                                        {"Get early access"}
                                    </a>
                                </>
                            }
                        } else {
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route> to={Route::Home} classes="nav-link">
                                        {"Home"}
                                    </Link<Route>>
                                </div>
                            }
                        }
                    }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_scroll_links_render_only_on_the_landing_route() {
        assert!(section_links_enabled(Some(&Route::Home)));
        assert!(section_links_enabled(None));
        assert!(!section_links_enabled(Some(&Route::Terms)));
        assert!(!section_links_enabled(Some(&Route::Privacy)));
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn show_console_branding() {
    let title_style = "font-size: 48px; font-weight: bold; \
                       background: linear-gradient(135deg, #2563EB, #F97316); \
                       -webkit-background-clip: text; -webkit-text-fill-color: transparent;";
    web_sys::console::log_2(&JsValue::from_str("%cGRIP"), &JsValue::from_str(title_style));
    web_sys::console::log_2(
        &JsValue::from_str("%cMaster Your Body. Own Your Streets."),
        &JsValue::from_str("font-size: 14px; color: #888;"),
    );
    web_sys::console::log_1(&JsValue::from_str(
        "Analytics: wasmBindings.grip_events() | Emails: wasmBindings.grip_collected_emails()",
    ));
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    show_console_branding();

    // Hydrates the analytics session from any previous visit.
    init_page_analytics();
    let cta_clicks = analytics::with_session(|analytics| analytics.count_by_name("cta_clicked"));
    info!("Total CTA clicks so far: {}", cta_clicks);

    yew::Renderer::<App>::new().render();
}

const NAV_CSS: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    padding: 1rem 2rem;
    transition: background 0.3s ease, box-shadow 0.3s ease;
    background: transparent;
}
.top-nav.scrolled {
    background: rgba(13, 13, 15, 0.92);
    backdrop-filter: blur(10px);
    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.4);
}
.nav-content {
    max-width: 1100px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    font-weight: 800;
    font-size: 1.3rem;
    letter-spacing: 0.2em;
    color: #fff;
    text-decoration: none;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 1.6rem;
}
.nav-link {
    color: #ccc;
    text-decoration: none;
    font-size: 0.95rem;
}
.nav-link:hover { color: #fff; }
.nav-cta {
    background: linear-gradient(135deg, #2563EB, #F97316);
    color: white;
    padding: 0.5rem 1.1rem;
    border-radius: 8px;
    text-decoration: none;
    font-weight: 600;
    font-size: 0.95rem;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
    transition: transform 0.3s ease, opacity 0.3s ease;
}
.burger-menu.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.burger-menu.active span:nth-child(2) { opacity: 0; }
.burger-menu.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
@media (max-width: 768px) {
    .burger-menu { display: flex; }
    .nav-right {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        background: rgba(13, 13, 15, 0.97);
        padding: 1.5rem 2rem;
        gap: 1.2rem;
    }
    .nav-right.mobile-menu-open { display: flex; }
}
"#;
