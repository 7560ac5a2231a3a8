//! Pure helpers with no host dependency.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting and identifier generation are kept apart from the services so
//! they can be called directly and tested without a surface or timers.

pub mod id;
pub mod time_format;
