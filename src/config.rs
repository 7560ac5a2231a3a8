//! Kit configuration parsed from environment variables.
//!
//! Every field has a default; unparseable numeric overrides fall back to it.
//! On `wasm32` hosts the environment is empty, so `from_env` yields defaults.

use std::time::Duration;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
pub const DEFAULT_TOAST_ANIMATION_MS: u64 = 300;
pub const DEFAULT_TOAST_OFFSET_PX: u32 = 20;
pub const DEFAULT_COPY_MESSAGE: &str = "Copied to clipboard";
pub const DEFAULT_COPY_FAILED_MESSAGE: &str = "Copy to clipboard failed";
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitConfig {
    /// Lifetime of a toast when the caller does not pass one.
    pub toast_duration: Duration,
    /// Length of the slide-in and slide-out animations.
    pub toast_animation: Duration,
    /// Distance from the top and right edges of the viewport.
    pub toast_offset_px: u32,
    pub copy_message: String,
    pub copy_failed_message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            toast_animation: Duration::from_millis(DEFAULT_TOAST_ANIMATION_MS),
            toast_offset_px: DEFAULT_TOAST_OFFSET_PX,
            copy_message: DEFAULT_COPY_MESSAGE.to_owned(),
            copy_failed_message: DEFAULT_COPY_FAILED_MESSAGE.to_owned(),
            confirm_label: DEFAULT_CONFIRM_LABEL.to_owned(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_owned(),
        }
    }
}

impl KitConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CONSOLE_KIT_TOAST_DURATION_MS`: default 3000
    /// - `CONSOLE_KIT_TOAST_ANIMATION_MS`: default 300
    /// - `CONSOLE_KIT_TOAST_OFFSET_PX`: default 20
    /// - `CONSOLE_KIT_COPY_MESSAGE`
    /// - `CONSOLE_KIT_COPY_FAILED_MESSAGE`
    /// - `CONSOLE_KIT_CONFIRM_LABEL`
    /// - `CONSOLE_KIT_CANCEL_LABEL`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            toast_duration: Duration::from_millis(parse_or(
                &lookup,
                "CONSOLE_KIT_TOAST_DURATION_MS",
                DEFAULT_TOAST_DURATION_MS,
            )),
            toast_animation: Duration::from_millis(parse_or(
                &lookup,
                "CONSOLE_KIT_TOAST_ANIMATION_MS",
                DEFAULT_TOAST_ANIMATION_MS,
            )),
            toast_offset_px: parse_or(&lookup, "CONSOLE_KIT_TOAST_OFFSET_PX", DEFAULT_TOAST_OFFSET_PX),
            copy_message: text_or(&lookup, "CONSOLE_KIT_COPY_MESSAGE", defaults.copy_message),
            copy_failed_message: text_or(&lookup, "CONSOLE_KIT_COPY_FAILED_MESSAGE", defaults.copy_failed_message),
            confirm_label: text_or(&lookup, "CONSOLE_KIT_CONFIRM_LABEL", defaults.confirm_label),
            cancel_label: text_or(&lookup, "CONSOLE_KIT_CANCEL_LABEL", defaults.cancel_label),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn text_or<F>(lookup: &F, key: &str, default: String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
