//! Console UI helpers: formatting, ids, clipboard, toasts, confirm dialogs,
//! debounce and throttle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Utils` is a cheap-to-clone handle over a `Surface`, a `Timers` source and
//! the kit config. All host effects go through those two traits, so the same
//! code runs against the DOM, a tokio `LocalSet`, or the headless recorder.
//!
//! TRADE-OFFS
//! ==========
//! Nothing here returns an error. A toast that cannot mount is logged and
//! dropped; a dialog that cannot mount resolves as cancelled so its caller
//! still hears back exactly once.

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::config::KitConfig;
use crate::error::PlatformError;
use crate::platform::{ElementId, Surface};
use crate::timing::{Debounced, Throttled, Timers};
use crate::ui::{Callback, ConfirmDialog, DialogChoice, DialogResponder, DialogView, Severity, ToastView};
use crate::util::{id, time_format};

#[derive(Clone)]
pub struct Utils {
    surface: Rc<dyn Surface>,
    timers: Rc<dyn Timers>,
    config: Rc<KitConfig>,
}

impl Utils {
    pub fn new(surface: Rc<dyn Surface>, timers: Rc<dyn Timers>, config: KitConfig) -> Self {
        Self { surface, timers, config: Rc::new(config) }
    }

    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    // =========================================================================
    // FORMATTING
    // =========================================================================

    /// `YYYY-MM-DD HH:MM:SS` in the host's local time.
    pub fn format_time(&self, date: OffsetDateTime) -> String {
        time_format::format_time_local(date)
    }

    pub fn uuid(&self) -> String {
        id::uuid()
    }

    // =========================================================================
    // TOASTS
    // =========================================================================

    /// Show a toast for `duration`, then remove it.
    pub fn show_toast(&self, message: &str, severity: Severity, duration: Duration) {
        let view = ToastView::new(message, severity, duration, &self.config);
        let id = match self.surface.mount_toast(&view) {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, severity = %severity, "toast mount failed");
                return;
            }
        };
        let surface = Rc::clone(&self.surface);
        self.timers
            .set_timeout(duration, Box::new(move || surface.unmount(id)));
    }

    /// Show a toast for the configured default duration.
    pub fn toast(&self, message: &str, severity: Severity) {
        self.show_toast(message, severity, self.config.toast_duration);
    }

    /// Like `show_toast`, with the severity given by name (`info` when unknown).
    pub fn show_toast_named(&self, message: &str, severity: &str, duration: Duration) {
        self.show_toast(message, Severity::from_name(severity), duration);
    }

    // =========================================================================
    // CLIPBOARD
    // =========================================================================

    /// Put `text` on the clipboard and toast the outcome.
    pub fn copy_to_clipboard(&self, text: &str) {
        if self.surface.has_async_clipboard() {
            let utils = self.clone();
            self.surface
                .write_clipboard_async(text, Box::new(move |result| utils.report_copy(result)));
        } else {
            let result = self.surface.write_clipboard_legacy(text);
            self.report_copy(result);
        }
    }

    fn report_copy(&self, result: Result<(), PlatformError>) {
        match result {
            Ok(()) => self.toast(&self.config.copy_message, Severity::Info),
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                self.toast(&self.config.copy_failed_message, Severity::Error);
            }
        }
    }

    // =========================================================================
    // CONFIRM
    // =========================================================================

    /// Ask the user to confirm `message`. Exactly one callback runs, once.
    pub fn confirm(&self, message: &str, on_confirm: Option<Callback>, on_cancel: Option<Callback>) {
        self.open_confirm(ConfirmDialog::with_callbacks(message, on_confirm, on_cancel));
    }

    /// Mount `dialog`. The modal is removed before its callback runs.
    pub fn open_confirm(&self, dialog: ConfirmDialog) {
        let view = DialogView::new(&dialog.message, &self.config);
        let mounted: Rc<Cell<Option<ElementId>>> = Rc::new(Cell::new(None));

        let surface = Rc::clone(&self.surface);
        let slot = Rc::clone(&mounted);
        let responder = DialogResponder::new(move |choice| {
            if let Some(id) = slot.take() {
                surface.unmount(id);
            }
            debug!(?choice, "confirm dialog resolved");
            dialog.resolve(choice);
        });

        match self.surface.mount_dialog(&view, responder.clone()) {
            Ok(id) => mounted.set(Some(id)),
            Err(e) => {
                warn!(error = %e, "confirm dialog mount failed; resolving as cancel");
                responder.respond(DialogChoice::Cancel);
            }
        }
    }

    // =========================================================================
    // RATE CONTROL
    // =========================================================================

    /// Wrap `func` so it runs once `wait` has passed without another call.
    pub fn debounce<A, F>(&self, func: F, wait: Duration) -> Debounced<A>
    where
        A: 'static,
        F: Fn(A) + 'static,
    {
        Debounced::new(Rc::clone(&self.timers), wait, func)
    }

    /// Wrap `func` so it runs at most once per `limit`, on the leading edge.
    pub fn throttle<A, F>(&self, func: F, limit: Duration) -> Throttled<A>
    where
        F: Fn(A) + 'static,
    {
        Throttled::new(Rc::clone(&self.timers), limit, func)
    }
}
