use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use yew::prelude::*;

mod config;
mod content;
mod debounce;
mod text;
mod typing;
mod validate;

mod components {
    pub mod contact;
    pub mod modal;
    pub mod nav;
    pub mod reveal;
    pub mod sections;
    pub mod typed;
}
mod pages {
    pub mod landing;
}

use components::modal::{self, MessageModal, Notice};
use components::nav::Nav;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let notice = use_state(|| None::<Notice>);

    // Notices raised outside the component tree (dev hook) arrive as a
    // window-level custom event.
    {
        let notice = notice.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::<dyn Fn(web_sys::CustomEvent)>::new(
                    move |e: web_sys::CustomEvent| {
                        if let Ok(incoming) = serde_wasm_bindgen::from_value::<Notice>(e.detail()) {
                            notice.set(Some(incoming));
                        }
                    },
                );
                window
                    .add_event_listener_with_callback(
                        modal::NOTICE_EVENT,
                        callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    let _ = window.remove_event_listener_with_callback(
                        modal::NOTICE_EVENT,
                        callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let on_notify = {
        let notice = notice.clone();
        Callback::from(move |incoming: Notice| notice.set(Some(incoming)))
    };
    let on_close = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <>
            <Nav />
            <Landing on_notify={on_notify} />
            <MessageModal notice={(*notice).clone()} on_close={on_close} />
        </>
    }
}

/// Debug aid: on a local-development host, expose the content catalog, the
/// validation rules and the modal on `window.FM`. Not part of the
/// production contract.
fn install_dev_hooks() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hostname = window.location().hostname().unwrap_or_default();
    if hostname != "localhost" && hostname != "127.0.0.1" {
        return;
    }

    let namespace = js_sys::Object::new();

    if let Ok(catalog) = serde_wasm_bindgen::to_value(&content::catalog()) {
        let _ = js_sys::Reflect::set(&namespace, &"projectsData".into(), &catalog);
    }

    let validate_fn = Closure::<dyn Fn(JsValue) -> JsValue>::new(|raw: JsValue| {
        match serde_wasm_bindgen::from_value::<validate::ContactData>(raw) {
            Ok(data) => serde_wasm_bindgen::to_value(&validate::validate(&data))
                .unwrap_or(JsValue::NULL),
            Err(e) => JsValue::from_str(&e.to_string()),
        }
    });
    let _ = js_sys::Reflect::set(&namespace, &"validateContactForm".into(), validate_fn.as_ref());
    validate_fn.forget();

    let show_modal = Closure::<dyn Fn(String, String)>::new(|title: String, message: String| {
        modal::dispatch_notice(&title, &message);
    });
    let _ = js_sys::Reflect::set(&namespace, &"showModal".into(), show_modal.as_ref());
    show_modal.forget();

    let _ = js_sys::Reflect::set(&window, &"FM".into(), &namespace);
    info!("Dev helpers available at window.FM");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Future Minds frontend");
    install_dev_hooks();
    yew::Renderer::<App>::new().render();
}
