use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::typing::{TypingState, PHRASES, TYPE_DELAY_MS};

/// Hero typing effect. The state machine lives in `crate::typing`; this
/// component just drives it with a timeout chain. Dropping the pending
/// handle on unmount stops the chain.
#[function_component(TypedText)]
pub fn typed_text() -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |_| {
                fn schedule(
                    state: Rc<RefCell<TypingState>>,
                    pending: Rc<RefCell<Option<Timeout>>>,
                    text: UseStateHandle<String>,
                    delay: u32,
                ) {
                    let timeout = Timeout::new(delay, {
                        let pending = Rc::clone(&pending);
                        move || {
                            let (visible, next_delay) = state.borrow_mut().tick();
                            text.set(visible.to_string());
                            schedule(state, pending, text, next_delay);
                        }
                    });
                    *pending.borrow_mut() = Some(timeout);
                }

                let pending = Rc::new(RefCell::new(None));
                let state = Rc::new(RefCell::new(TypingState::new(PHRASES)));
                schedule(state, Rc::clone(&pending), text, TYPE_DELAY_MS);

                move || {
                    // Dropping the timeout cancels whatever tick was queued.
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <span id="typed-text" class="typed-text">{ (*text).clone() }</span>
    }
}
