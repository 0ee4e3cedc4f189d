//! One-shot entrance reveal for sections and cards, driven by an
//! IntersectionObserver when the platform has one.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_CLASS: &str = "animate-fade-in";
const OBSERVED_SELECTOR: &str = "section, .service-card, .feature-card, .testimonial-card";
/// Root margin trimming the bottom of the viewport so elements reveal a
/// little before they are fully on screen.
const ROOT_MARGIN: &str = "0px 0px -50px 0px";
const VISIBLE_THRESHOLD: f64 = 0.1;
/// Per-element delay spreading observation starts over the load.
const STAGGER_MS: u32 = 50;

/// Starts observing every section and card; each element is revealed once
/// and never re-hidden. Returns the observer so the caller's effect
/// destructor can disconnect it, or `None` when the platform has no
/// IntersectionObserver (content then stays visible without animation).
pub fn observe_sections() -> Option<IntersectionObserver> {
    let window = web_sys::window()?;
    let document = window.document()?;
    if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        return None;
    }

    let callback = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    // The observer outlives this scope; its callback has to as well.
    callback.forget();

    let nodes = document.query_selector_all(OBSERVED_SELECTOR).ok()?;
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        let observer = observer.clone();
        Timeout::new(index * STAGGER_MS, move || observer.observe(&element)).forget();
    }

    Some(observer)
}
