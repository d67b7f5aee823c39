//! Scroll-reveal animation for the landing sections.
//!
//! An IntersectionObserver adds `visible` to every `.animate-on-scroll`
//! element once a tenth of it enters the viewport; the CSS in the landing
//! page does the actual fade/slide. Cards inside the marked sections get a
//! small per-index transition delay so grids stagger in.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

const REVEAL_SELECTORS: [&str; 5] = [
    ".feature-card",
    ".step",
    ".testimonial-card",
    ".spot-card",
    ".stat",
];

fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length()).filter_map(|i| list.item(i).and_then(|n| n.dyn_into::<Element>().ok()))
}

/// Install the observer and mark the landing sections. Call once after the
/// page has rendered; the observer and its callback stay alive for the page
/// lifetime.
pub fn init_scroll_reveal() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>::new(
        |entries: Vec<IntersectionObserverEntry>, _observer: IntersectionObserver| {
            for entry in entries {
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(0.1));

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => return,
        };
    callback.forget();

    // Elements that opted in by hand.
    if let Ok(list) = document.query_selector_all(".animate-on-scroll") {
        for element in elements(&list) {
            observer.observe(&element);
        }
    }

    // Card grids get the class plus a stagger delay.
    for selector in REVEAL_SELECTORS {
        let list = match document.query_selector_all(selector) {
            Ok(list) => list,
            Err(_) => continue,
        };
        for (index, element) in elements(&list).enumerate() {
            let _ = element.class_list().add_1("animate-on-scroll");
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                let _ = html
                    .style()
                    .set_property("transition-delay", &format!("{:.1}s", index as f64 * 0.1));
            }
            observer.observe(&element);
        }
    }
}
