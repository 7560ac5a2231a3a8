//! Rendering surface: the DOM side of the host behind one trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Utils` never touches the DOM directly. It hands precomputed views to a
//! `Surface`, which mounts them and reports back an `ElementId` for removal.
//! `HeadlessSurface` records everything in memory for tests and server
//! rendering; `DomSurface` is the browser implementation behind `hydrate`.

pub mod headless;
pub mod registry;

#[cfg(feature = "hydrate")]
pub mod dom;

pub use headless::{ClipboardMode, HeadlessSurface};
pub use registry::{MountRegistry, Mounted};

#[cfg(feature = "hydrate")]
pub use dom::DomSurface;

use crate::error::PlatformError;
use crate::ui::{DialogResponder, DialogView, ToastView};

/// Handle for a mounted toast or dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Completion callback for an async clipboard write.
pub type ClipboardDone = Box<dyn FnOnce(Result<(), PlatformError>)>;

pub trait Surface {
    fn mount_toast(&self, view: &ToastView) -> Result<ElementId, PlatformError>;

    /// Mount a modal. The surface wires both buttons to `responder`.
    fn mount_dialog(&self, view: &DialogView, responder: DialogResponder) -> Result<ElementId, PlatformError>;

    /// Remove a mounted element. Unknown ids are ignored.
    fn unmount(&self, id: ElementId);

    /// Install a `<style>` block keyed by `id`. Returns `false` if one with
    /// that id is already present.
    fn install_styles(&self, id: &str, css: &str) -> Result<bool, PlatformError>;

    /// Whether the async clipboard API exists on this host.
    fn has_async_clipboard(&self) -> bool;

    /// Write `text` through the async clipboard; `done` runs on settle.
    fn write_clipboard_async(&self, text: &str, done: ClipboardDone);

    /// Select-and-copy fallback through a transient hidden input.
    fn write_clipboard_legacy(&self, text: &str) -> Result<(), PlatformError>;
}
