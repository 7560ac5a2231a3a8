//! The slide-in/slide-out keyframes used by toasts.

use crate::error::PlatformError;
use crate::platform::Surface;

/// Element id of the installed `<style>` block.
pub const STYLE_ELEMENT_ID: &str = "console-kit-animations";

pub const ANIMATIONS_CSS: &str = "
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
";

/// Install the keyframes once per surface. Returns `true` on first install.
pub fn install(surface: &dyn Surface) -> Result<bool, PlatformError> {
    surface.install_styles(STYLE_ELEMENT_ID, ANIMATIONS_CSS)
}
