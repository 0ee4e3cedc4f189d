//! Small scheduling primitive coalescing bursts of calls into one
//! invocation per quiet period.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Fire immediately on the first call of a burst.
    Leading,
    /// Fire once the burst has been quiet for the full delay.
    Trailing,
}

pub struct Debounce {
    delay_ms: u32,
    edge: Edge,
    action: Rc<dyn Fn()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    pub fn new(delay_ms: u32, edge: Edge, action: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            edge,
            action: Rc::new(action),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn trailing(delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self::new(delay_ms, Edge::Trailing, action)
    }

    /// Registers one call of the burst, restarting the quiet-period timer.
    pub fn call(&self) {
        let was_pending = self.pending.borrow_mut().take().is_some();
        if self.edge == Edge::Leading && !was_pending {
            (self.action)();
        }
        let pending = Rc::clone(&self.pending);
        let action = Rc::clone(&self.action);
        let edge = self.edge;
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            if edge == Edge::Trailing {
                action();
            }
        });
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Drops any pending timer without firing.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }

    /// Cancels any pending timer and runs the action right now.
    pub fn flush(&self) {
        self.cancel();
        (self.action)();
    }
}
