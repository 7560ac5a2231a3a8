//! Trailing-edge debounce: run once after `wait` of quiet.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::{TimerId, Timers};

/// Wrapper returned by `Utils::debounce`.
///
/// Each `call` restarts the quiet period; only the latest arguments reach
/// `func`. Clones share the same pending timer.
pub struct Debounced<A> {
    func: Rc<dyn Fn(A)>,
    wait: Duration,
    timers: Rc<dyn Timers>,
    pending: Rc<Cell<Option<TimerId>>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
            wait: self.wait,
            timers: Rc::clone(&self.timers),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn new<F>(timers: Rc<dyn Timers>, wait: Duration, func: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self {
            func: Rc::new(func),
            wait,
            timers,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Request an invocation with `args`, replacing any pending one.
    pub fn call(&self, args: A) {
        self.cancel();
        let func = Rc::clone(&self.func);
        let pending = Rc::clone(&self.pending);
        let id = self.timers.set_timeout(
            self.wait,
            Box::new(move || {
                pending.set(None);
                func(args);
            }),
        );
        self.pending.set(Some(id));
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.timers.clear_timeout(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}
