use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, KeyboardEvent};
use yew::prelude::*;

/// Event name the dev hook uses to raise a notice from outside the
/// component tree.
pub const NOTICE_EVENT: &str = "fm:show-modal";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Raises a notice through a window-level custom event; `App` listens for
/// it and feeds the shared modal state.
pub fn dispatch_notice(title: &str, message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let detail = match serde_wasm_bindgen::to_value(&Notice::new(title, message)) {
        Ok(value) => value,
        Err(_) => return,
    };
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(event) = CustomEvent::new_with_event_init_dict(NOTICE_EVENT, &init) {
        let _ = window.dispatch_event(&event);
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<()>,
}

/// The one shared modal. Showing while already shown just overwrites the
/// content; while visible, page scroll is suppressed and Escape dismisses.
#[function_component(MessageModal)]
pub fn message_modal(props: &ModalProps) -> Html {
    let visible = props.notice.is_some();

    {
        use_effect_with_deps(
            move |visible| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let overflow = if *visible { "hidden" } else { "" };
                    let _ = body.style().set_property("overflow", overflow);
                }
                || ()
            },
            visible,
        );
    }

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |visible| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;
                if *visible {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        });
                        if document
                            .add_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            )
                            .is_ok()
                        {
                            cleanup = Some(Box::new(move || {
                                let _ = document.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }));
                        }
                    }
                }
                move || {
                    if let Some(remove) = cleanup {
                        remove();
                    }
                }
            },
            visible,
        );
    }

    let Some(notice) = props.notice.clone() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal" id="message-modal" onclick={close.clone()}>
            <style>
                {r#".modal {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.55);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 100;
                }
                .modal__content {
                    position: relative;
                    background: #1e1e1e;
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    padding: 2rem 2.5rem;
                    max-width: 420px;
                    width: calc(100% - 2rem);
                    color: #eee;
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.4);
                }
                .modal__close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.75rem;
                    background: none;
                    border: none;
                    color: #aaa;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .modal__title {
                    margin: 0 0 0.75rem;
                    font-size: 1.3rem;
                }
                .modal__message {
                    margin: 0;
                    color: #ccc;
                    line-height: 1.5;
                }"#}
            </style>
            <div class="modal__content" onclick={keep_open}>
                <button class="modal__close" id="modal-close" onclick={close}>{"×"}</button>
                <h3 class="modal__title">{ notice.title }</h3>
                <p class="modal__message">{ notice.message }</p>
            </div>
        </div>
    }
}
