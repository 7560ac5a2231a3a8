//! Browser timers backed by `gloo-timers`.
//!
//! A fired `Timeout` cannot be dropped from inside its own callback, so fired
//! ids are parked in `fired` and swept on the next schedule or clear.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

use super::{Task, TimerId, Timers};

/// Largest delay `setTimeout` honours; longer ones would fire at once.
const MAX_DELAY_MS: u32 = 0x7fff_ffff;

pub struct BrowserTimers {
    origin_ms: f64,
    next_id: Cell<u64>,
    live: RefCell<HashMap<TimerId, Timeout>>,
    fired: Rc<RefCell<Vec<TimerId>>>,
}

impl BrowserTimers {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin_ms: js_sys::Date::now(),
            next_id: Cell::new(0),
            live: RefCell::new(HashMap::new()),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn sweep(&self) {
        let fired: Vec<TimerId> = self.fired.borrow_mut().drain(..).collect();
        let mut live = self.live.borrow_mut();
        for id in fired {
            live.remove(&id);
        }
    }
}

impl Default for BrowserTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl Timers for BrowserTimers {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now(&self) -> Duration {
        let elapsed = (js_sys::Date::now() - self.origin_ms).max(0.0);
        Duration::from_millis(elapsed as u64)
    }

    /// Delays past `setTimeout`'s signed 32-bit limit are clamped to it.
    fn set_timeout(&self, delay: Duration, task: Task) -> TimerId {
        self.sweep();
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let fired = Rc::clone(&self.fired);
        let millis = u32::try_from(delay.as_millis()).map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS));
        let timeout = Timeout::new(millis, move || {
            task();
            // After `task`, so a sweep it triggers cannot drop this timeout.
            fired.borrow_mut().push(id);
        });
        self.live.borrow_mut().insert(id, timeout);
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.sweep();
        // Dropping a `Timeout` cancels it.
        self.live.borrow_mut().remove(&id);
    }
}
