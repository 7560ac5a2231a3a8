//! # console-kit
//!
//! Client-side helpers for the browser console: toast notifications, confirm
//! dialogs, clipboard copy, debounce/throttle, timestamp formatting, random
//! ids, and JSON storage over `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two services, `Utils` and `Storage`, are built explicitly (usually through
//! `Kit::init`) instead of living on `window`. Host effects sit behind three
//! traits: `Surface` (DOM and clipboard), `Timers`, and `KeyValueStore`.
//! The browser implementations compile with the `hydrate` feature; headless
//! ones are always available for tests and server rendering.

pub mod config;
pub mod error;
pub mod kit;
pub mod logging;
pub mod platform;
pub mod storage;
pub mod store;
pub mod timing;
pub mod ui;
pub mod util;
pub mod utils;

pub use config::KitConfig;
pub use error::{InitError, PlatformError, StorageError};
pub use kit::Kit;
pub use platform::{ElementId, Surface};
pub use storage::Storage;
pub use store::KeyValueStore;
pub use timing::{Debounced, Throttled, TimerId, Timers};
pub use ui::{ConfirmDialog, DialogChoice, Severity};
pub use utils::Utils;
