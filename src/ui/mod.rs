//! View models for the transient console UI: toasts, confirm dialogs, and the
//! animation style block.
//!
//! DESIGN
//! ======
//! Views are plain data with their inline styles precomputed, so a surface
//! only has to create elements and copy strings across.

pub mod dialog;
pub mod styles;
pub mod toast;

pub use dialog::{Callback, ConfirmDialog, DialogChoice, DialogResponder, DialogView};
pub use toast::{Severity, ToastView};
