use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::debounce::Debounce;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#features", "Features"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

/// Scroll distance past which the header flips to its opaque look.
const SCROLL_THRESHOLD: f64 = 50.0;
/// Quiet period for coalescing raw scroll events.
const SCROLL_DEBOUNCE_MS: u32 = 15;
/// Extra margin below the header when scrolling to an anchor target.
const ANCHOR_MARGIN: i32 = 20;
/// Offset fallback when the header is not mounted.
const ANCHOR_FALLBACK_OFFSET: i32 = 80;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_link = use_state(|| None::<&'static str>);
    let header_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let debounce = Rc::new(Debounce::trailing(SCROLL_DEBOUNCE_MS, move || {
                    if let Some(win) = web_sys::window() {
                        let scrolled = win.scroll_y().unwrap_or(0.0) > SCROLL_THRESHOLD;
                        is_scrolled.set(scrolled);
                    }
                }));
                // Initial recompute so a reloaded mid-page document starts
                // with the right header state.
                debounce.flush();

                let callback = {
                    let debounce = Rc::clone(&debounce);
                    Closure::<dyn Fn()>::new(move || debounce.call())
                };
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    debounce.cancel();
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
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

    let make_link = |href: &'static str, label: &'static str| {
        let onclick = {
            let active_link = active_link.clone();
            let menu_open = menu_open.clone();
            let header_ref = header_ref.clone();
            Callback::from(move |e: MouseEvent| {
                // Only in-page anchors are intercepted; anything else keeps
                // default browser navigation.
                if !href.starts_with('#') {
                    return;
                }
                e.prevent_default();
                let Some(window) = web_sys::window() else {
                    return;
                };
                let Some(target) = window
                    .document()
                    .and_then(|d| d.get_element_by_id(&href[1..]))
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                let offset = header_ref
                    .cast::<HtmlElement>()
                    .map(|h| h.offset_height() + ANCHOR_MARGIN)
                    .unwrap_or(ANCHOR_FALLBACK_OFFSET);
                let options = ScrollToOptions::new();
                options.set_top(f64::from(target.offset_top() - offset));
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
                active_link.set(Some(href));
                menu_open.set(false);
            })
        };
        let class = classes!(
            "nav__link",
            (*active_link == Some(href)).then_some("active")
        );
        html! {
            <li class="nav__item">
                <a {class} href={href} {onclick}>{ label }</a>
            </li>
        }
    };

    html! {
        <header
            id="header"
            ref={header_ref.clone()}
            class={classes!("header", (*is_scrolled).then_some("scrolled"))}
        >
            <style>
                {r#".header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(10px);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
                }
                .nav {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }
                .nav__logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    text-decoration: none;
                    color: inherit;
                }
                .nav__list {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav__link {
                    text-decoration: none;
                    color: inherit;
                    padding-bottom: 2px;
                }
                .nav__link.active {
                    border-bottom: 2px solid #1e90ff;
                }
                .nav__toggle {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .nav__toggle span {
                    width: 24px;
                    height: 2px;
                    background: currentColor;
                    transition: transform 0.2s ease;
                }
                .nav__toggle.active span:first-child {
                    transform: translateY(6px) rotate(45deg);
                }
                .nav__toggle.active span:nth-child(2) {
                    opacity: 0;
                }
                .nav__toggle.active span:last-child {
                    transform: translateY(-6px) rotate(-45deg);
                }
                @media (max-width: 768px) {
                    .nav__toggle { display: flex; }
                    .nav__list {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        background: rgba(20, 20, 20, 0.95);
                        padding: 1rem 1.5rem;
                        display: none;
                    }
                    .nav__list.show { display: flex; }
                }"#}
            </style>
            <nav class="nav">
                <a class="nav__logo" href="#home">{"Future Minds"}</a>
                <button
                    id="nav-toggle"
                    class={classes!("nav__toggle", (*menu_open).then_some("active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="nav-list" class={classes!("nav__list", (*menu_open).then_some("show"))}>
                    { for NAV_LINKS.iter().map(|&(href, label)| make_link(href, label)) }
                </ul>
            </nav>
        </header>
    }
}
