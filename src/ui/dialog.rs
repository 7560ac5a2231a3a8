//! Confirm dialogs.
//!
//! A `ConfirmDialog` is consumed by `resolve`, so a dialog can run at most one
//! of its callbacks. `DialogResponder` is the clonable handle surfaces wire to
//! the buttons; only its first `respond` does anything.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod tests;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::KitConfig;

pub type Callback = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogChoice {
    Confirm,
    Cancel,
}

/// Message plus optional confirm/cancel callbacks.
#[derive(Default)]
pub struct ConfirmDialog {
    pub message: String,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl ConfirmDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), on_confirm: None, on_cancel: None }
    }

    #[must_use]
    pub fn on_confirm(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    pub(crate) fn with_callbacks(
        message: impl Into<String>,
        on_confirm: Option<Callback>,
        on_cancel: Option<Callback>,
    ) -> Self {
        Self { message: message.into(), on_confirm, on_cancel }
    }

    /// Run the callback matching `choice`. A missing callback is a no-op.
    pub fn resolve(self, choice: DialogChoice) {
        let callback = match choice {
            DialogChoice::Confirm => self.on_confirm,
            DialogChoice::Cancel => self.on_cancel,
        };
        if let Some(f) = callback {
            f();
        }
    }
}

impl fmt::Debug for ConfirmDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmDialog")
            .field("message", &self.message)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

pub const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; right: 0; bottom: 0; \
     background: rgba(0, 0, 0, 0.6); display: flex; align-items: center; \
     justify-content: center; z-index: 9999;";

pub const PANEL_STYLE: &str = "background: #1e1e1e; padding: 24px; border-radius: 8px; \
     min-width: 300px; max-width: 500px; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.5);";

pub const MESSAGE_STYLE: &str = "margin-bottom: 20px; color: #e8e8e8; font-size: 16px;";

pub const BUTTON_ROW_STYLE: &str = "display: flex; gap: 12px; justify-content: flex-end;";

/// What a surface needs to draw the modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogView {
    /// Rendered as text, never as markup.
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl DialogView {
    #[must_use]
    pub fn new(message: &str, config: &KitConfig) -> Self {
        Self {
            message: message.to_owned(),
            confirm_label: config.confirm_label.clone(),
            cancel_label: config.cancel_label.clone(),
        }
    }
}

type Responder = Box<dyn FnOnce(DialogChoice)>;

/// Button handle shared by a dialog's confirm and cancel buttons.
#[derive(Clone)]
pub struct DialogResponder {
    slot: Rc<RefCell<Option<Responder>>>,
}

impl DialogResponder {
    pub fn new(f: impl FnOnce(DialogChoice) + 'static) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(Box::new(f)))) }
    }

    /// Deliver `choice`. Returns `false` if the dialog was already settled.
    pub fn respond(&self, choice: DialogChoice) -> bool {
        let responder = self.slot.borrow_mut().take();
        match responder {
            Some(f) => {
                f(choice);
                true
            }
            None => false,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.slot.borrow().is_none()
    }
}

impl fmt::Debug for DialogResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogResponder")
            .field("settled", &self.is_settled())
            .finish()
    }
}
