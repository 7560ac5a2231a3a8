//! Toast severities and the rendered toast view.

#[cfg(test)]
#[path = "toast_test.rs"]
mod tests;

use std::fmt;
use std::time::Duration;

use crate::config::KitConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parse a severity name; anything unrecognised is `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Background colour.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "#1890ff",
            Self::Success => "#52c41a",
            Self::Warning => "#faad14",
            Self::Error => "#ff4d4f",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A toast ready to mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
    /// `toast toast-<severity>`.
    pub class_name: String,
    /// Inline CSS for the toast element.
    pub style: String,
}

impl ToastView {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity, duration: Duration, config: &KitConfig) -> Self {
        let animation_ms = config.toast_animation.as_millis();
        let exit_delay_ms = exit_delay(duration, config.toast_animation).as_millis();
        let offset = config.toast_offset_px;
        let style = format!(
            "position: fixed; top: {offset}px; right: {offset}px; padding: 12px 20px; \
             border-radius: 8px; color: white; font-size: 14px; z-index: 10000; \
             animation: slideIn {animation_ms}ms, slideOut {animation_ms}ms {exit_delay_ms}ms; \
             box-shadow: 0 4px 12px rgba(0,0,0,0.3); background: {color};",
            color = severity.color(),
        );
        Self {
            message: message.into(),
            severity,
            duration,
            class_name: format!("toast toast-{severity}"),
            style,
        }
    }
}

/// When the slide-out starts so it finishes as the toast is removed.
#[must_use]
pub fn exit_delay(duration: Duration, animation: Duration) -> Duration {
    duration.saturating_sub(animation)
}
