//! Virtual-clock timers advanced explicitly by the caller.

#[cfg(test)]
#[path = "manual_test.rs"]
mod tests;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use super::{Task, TimerId, Timers};

#[derive(Default)]
pub struct ManualTimers {
    inner: RefCell<ManualInner>,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    /// Pending tasks ordered by (due time, id) so equal deadlines run FIFO.
    queue: BTreeMap<(Duration, TimerId), Task>,
    due_by_id: HashMap<TimerId, Duration>,
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks scheduled by a running task fire in the same call when their
    /// deadline is still within the window. The clock and every deadline
    /// saturate at `Duration::MAX`.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now.saturating_add(by);
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let key = inner
                    .queue
                    .keys()
                    .next()
                    .copied()
                    .filter(|(due, _)| *due <= target);
                key.and_then(|(due, id)| {
                    inner.due_by_id.remove(&id);
                    inner.now = due;
                    inner.queue.remove(&(due, id))
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }

    /// Convenience for `advance(Duration::from_millis(ms))`.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }
}

impl Timers for ManualTimers {
    fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    fn set_timeout(&self, delay: Duration, task: Task) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        let due = inner.now.saturating_add(delay);
        inner.queue.insert((due, id), task);
        inner.due_by_id.insert(id, due);
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(due) = inner.due_by_id.remove(&id) {
            inner.queue.remove(&(due, id));
        }
    }
}
