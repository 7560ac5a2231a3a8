//! Leading-edge throttle: run now, then ignore calls for `limit`.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod tests;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::Timers;

/// Wrapper returned by `Utils::throttle`.
pub struct Throttled<A> {
    func: Rc<dyn Fn(A)>,
    limit: Duration,
    timers: Rc<dyn Timers>,
    blocked: Rc<Cell<bool>>,
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
            limit: self.limit,
            timers: Rc::clone(&self.timers),
            blocked: Rc::clone(&self.blocked),
        }
    }
}

impl<A> Throttled<A> {
    pub fn new<F>(timers: Rc<dyn Timers>, limit: Duration, func: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self {
            func: Rc::new(func),
            limit,
            timers,
            blocked: Rc::new(Cell::new(false)),
        }
    }

    /// Invoke `func(args)` unless inside the quiet window. Returns whether it ran.
    pub fn call(&self, args: A) -> bool {
        if self.blocked.get() {
            return false;
        }
        self.blocked.set(true);
        let blocked = Rc::clone(&self.blocked);
        self.timers
            .set_timeout(self.limit, Box::new(move || blocked.set(false)));
        (self.func)(args);
        true
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.get()
    }
}
