//! Tracing subscriber setup.
//!
//! Natively this is the plain `fmt` subscriber. In the browser build no
//! tracing subscriber is installed: tracing's `log` feature forwards every
//! event to the `log` facade, and `console_log` writes each record with the
//! console method for its level (`console.error`, `console.warn`, ...).
//! Panics go through `console_error_panic_hook`.

/// Install the global subscriber. Later calls are no-ops.
#[cfg(not(feature = "hydrate"))]
pub fn init() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
}

/// Install the console logger. Later calls are no-ops.
#[cfg(feature = "hydrate")]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
