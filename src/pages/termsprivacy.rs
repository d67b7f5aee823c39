use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <style>{LEGAL_CSS}</style>
            <h1>{"Terms of Service"}</h1>
            <p>{"GRIP is in early access. By joining the waitlist you agree that we may \
                 email you about the launch in your city. Nothing more."}</p>
            <h2>{"Your data"}</h2>
            <p>{"The landing page keeps its analytics and your signup address in your own \
                 browser's local storage. Nothing is sent anywhere until a backend ships; \
                 see the privacy policy for details."}</p>
            <h2>{"Liability"}</h2>
            <p>{"Street workout is done at your own risk. Check the bar before you load it."}</p>
            <p class="legal-back"><Link<Route> to={Route::Home}>{"Back to GRIP"}</Link<Route>></p>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <style>{LEGAL_CSS}</style>
            <h1>{"Privacy Policy"}</h1>
            <p>{"This page runs entirely in your browser. Event tracking (page views, \
                 scroll depth, time on page, button clicks) is stored locally under the \
                 'grip_analytics' key and never leaves your device."}</p>
            <p>{"Email addresses submitted to the waitlist form are currently stored \
                 locally under 'grip_emails'. When the subscription backend launches, \
                 addresses will be sent to our mail-list provider and this policy will \
                 be updated first."}</p>
            <p>{"Clear your browser storage for this site to delete everything."}</p>
            <p class="legal-back"><Link<Route> to={Route::Home}>{"Back to GRIP"}</Link<Route>></p>
        </div>
    }
}

const LEGAL_CSS: &str = r#"
.legal-page {
    max-width: 720px;
    margin: 0 auto;
    padding: 6rem 1.5rem 4rem;
    color: #ddd;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.legal-page h1 { font-size: 2.2rem; margin-bottom: 1.5rem; color: #fff; }
.legal-page h2 { font-size: 1.4rem; margin: 2rem 0 0.8rem; color: #fff; }
.legal-page p { line-height: 1.6; margin-bottom: 1rem; }
.legal-back a { color: #7EB2FF; }
"#;
