//! Host timer abstraction plus the debounce/throttle wrappers built on it.
//!
//! DESIGN
//! ======
//! `Timers` mirrors the browser's `setTimeout`/`clearTimeout` pair and adds a
//! monotonic `now`. Everything above it is single-threaded: tasks are plain
//! `FnOnce` boxes, not `Send`.
//!
//! Implementations:
//! - `ManualTimers`: virtual clock for tests and server rendering.
//! - `TokioTimers`: native, `spawn_local` inside a `LocalSet`.
//! - `BrowserTimers`: `gloo-timers`, behind the `hydrate` feature.

pub mod debounce;
pub mod manual;
pub mod throttle;

#[cfg(not(target_arch = "wasm32"))]
pub mod tokio_timers;

#[cfg(feature = "hydrate")]
pub mod browser;

use std::time::Duration;

pub use debounce::Debounced;
pub use manual::ManualTimers;
pub use throttle::Throttled;

#[cfg(not(target_arch = "wasm32"))]
pub use tokio_timers::TokioTimers;

#[cfg(feature = "hydrate")]
pub use browser::BrowserTimers;

/// A scheduled task.
pub type Task = Box<dyn FnOnce()>;

/// Handle for a scheduled task; ids are never reused by one `Timers`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

pub trait Timers {
    /// Monotonic time since the timer source was created.
    fn now(&self) -> Duration;

    /// Run `task` once after `delay`.
    fn set_timeout(&self, delay: Duration, task: Task) -> TimerId;

    /// Cancel a pending task. Unknown or already-fired ids are ignored.
    fn clear_timeout(&self, id: TimerId);
}
