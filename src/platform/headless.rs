//! In-memory surface that records mounted views.
//!
//! Tests drive it like a user would: `click` a dialog button, read back the
//! toasts on screen, inspect what reached the clipboard.

#[cfg(test)]
#[path = "headless_test.rs"]
mod tests;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{ClipboardDone, ElementId, Surface};
use crate::error::PlatformError;
use crate::ui::{DialogChoice, DialogResponder, DialogView, ToastView};

/// Which clipboard path the fake host offers, and whether it succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipboardMode {
    #[default]
    Async,
    AsyncRejects,
    Legacy,
    LegacyFails,
}

#[derive(Default)]
pub struct HeadlessSurface {
    inner: RefCell<HeadlessInner>,
    clipboard_mode: Cell<ClipboardMode>,
    detached: Cell<bool>,
}

#[derive(Default)]
struct HeadlessInner {
    next_id: u64,
    toasts: BTreeMap<ElementId, ToastView>,
    dialogs: BTreeMap<ElementId, (DialogView, DialogResponder)>,
    styles: BTreeMap<String, String>,
    clipboard: Option<String>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clipboard(mode: ClipboardMode) -> Self {
        let surface = Self::default();
        surface.clipboard_mode.set(mode);
        surface
    }

    /// Simulate a page with no document: every mount fails.
    pub fn set_detached(&self, detached: bool) {
        self.detached.set(detached);
    }

    pub fn toasts(&self) -> Vec<ToastView> {
        self.inner.borrow().toasts.values().cloned().collect()
    }

    pub fn dialogs(&self) -> Vec<(ElementId, DialogView)> {
        self.inner
            .borrow()
            .dialogs
            .iter()
            .map(|(id, (view, _))| (*id, view.clone()))
            .collect()
    }

    pub fn is_mounted(&self, id: ElementId) -> bool {
        let inner = self.inner.borrow();
        inner.toasts.contains_key(&id) || inner.dialogs.contains_key(&id)
    }

    /// Press a dialog button. Returns `false` if no such dialog is open.
    pub fn click(&self, id: ElementId, choice: DialogChoice) -> bool {
        let responder = self
            .inner
            .borrow()
            .dialogs
            .get(&id)
            .map(|(_, responder)| responder.clone());
        responder.is_some_and(|r| r.respond(choice))
    }

    pub fn clipboard_text(&self) -> Option<String> {
        self.inner.borrow().clipboard.clone()
    }

    pub fn style(&self, id: &str) -> Option<String> {
        self.inner.borrow().styles.get(id).cloned()
    }

    fn next_id(inner: &mut HeadlessInner) -> ElementId {
        let id = ElementId(inner.next_id);
        inner.next_id += 1;
        id
    }

    fn check_attached(&self) -> Result<(), PlatformError> {
        if self.detached.get() {
            return Err(PlatformError::Unavailable("document"));
        }
        Ok(())
    }
}

impl Surface for HeadlessSurface {
    fn mount_toast(&self, view: &ToastView) -> Result<ElementId, PlatformError> {
        self.check_attached()?;
        let mut inner = self.inner.borrow_mut();
        let id = Self::next_id(&mut inner);
        inner.toasts.insert(id, view.clone());
        Ok(id)
    }

    fn mount_dialog(&self, view: &DialogView, responder: DialogResponder) -> Result<ElementId, PlatformError> {
        self.check_attached()?;
        let mut inner = self.inner.borrow_mut();
        let id = Self::next_id(&mut inner);
        inner.dialogs.insert(id, (view.clone(), responder));
        Ok(id)
    }

    fn unmount(&self, id: ElementId) {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            inner.toasts.remove(&id);
            inner.dialogs.remove(&id)
        };
        // The responder may own the last handle to callbacks; drop it unborrowed.
        drop(removed);
    }

    fn install_styles(&self, id: &str, css: &str) -> Result<bool, PlatformError> {
        self.check_attached()?;
        let mut inner = self.inner.borrow_mut();
        if inner.styles.contains_key(id) {
            return Ok(false);
        }
        inner.styles.insert(id.to_owned(), css.to_owned());
        Ok(true)
    }

    fn has_async_clipboard(&self) -> bool {
        matches!(self.clipboard_mode.get(), ClipboardMode::Async | ClipboardMode::AsyncRejects)
    }

    fn write_clipboard_async(&self, text: &str, done: ClipboardDone) {
        let result = match self.clipboard_mode.get() {
            ClipboardMode::Async => {
                self.inner.borrow_mut().clipboard = Some(text.to_owned());
                Ok(())
            }
            ClipboardMode::AsyncRejects => Err(PlatformError::Clipboard("write permission denied".into())),
            ClipboardMode::Legacy | ClipboardMode::LegacyFails => Err(PlatformError::Unavailable("async clipboard")),
        };
        done(result);
    }

    fn write_clipboard_legacy(&self, text: &str) -> Result<(), PlatformError> {
        if self.clipboard_mode.get() == ClipboardMode::LegacyFails {
            return Err(PlatformError::Clipboard("copy command rejected".into()));
        }
        self.inner.borrow_mut().clipboard = Some(text.to_owned());
        Ok(())
    }
}
