//! Native timers on the tokio runtime.
//!
//! Tasks are `!Send`, so they run through `tokio::task::spawn_local`. Every
//! `set_timeout` must therefore happen inside a `LocalSet`.

#[cfg(test)]
#[path = "tokio_timers_test.rs"]
mod tests;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::{Task, TimerId, Timers};

/// Timers backed by `tokio::time::sleep` on the current `LocalSet`.
///
/// # Panics
///
/// Constructing one is always fine, but [`Timers::set_timeout`] panics when
/// called outside a `LocalSet` (`tokio::task::spawn_local` requires one), and
/// so does anything that schedules through it: `Utils::show_toast`,
/// `Debounced::call`, `Throttled::call`.
pub struct TokioTimers {
    origin: Instant,
    next_id: Cell<u64>,
    handles: Rc<RefCell<HashMap<TimerId, JoinHandle<()>>>>,
}

impl TokioTimers {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            next_id: Cell::new(0),
            handles: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn pending(&self) -> usize {
        self.handles.borrow().len()
    }
}

impl Default for TokioTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl Timers for TokioTimers {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    /// # Panics
    ///
    /// Panics if called outside a `tokio::task::LocalSet`.
    fn set_timeout(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let handles = Rc::clone(&self.handles);
        let handle = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            handles.borrow_mut().remove(&id);
            task();
        });
        self.handles.borrow_mut().insert(id, handle);
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        if let Some(handle) = self.handles.borrow_mut().remove(&id) {
            handle.abort();
        }
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for (_, handle) in self.handles.borrow_mut().drain() {
            handle.abort();
        }
    }
}
