//! One `Utils` plus one `Storage`, bound to a host.

#[cfg(test)]
#[path = "kit_test.rs"]
mod tests;

use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::KitConfig;
use crate::platform::Surface;
use crate::storage::Storage;
use crate::store::KeyValueStore;
use crate::timing::Timers;
use crate::ui::styles;
use crate::utils::Utils;

#[derive(Clone)]
pub struct Kit {
    pub utils: Utils,
    pub storage: Storage,
}

impl Kit {
    /// Bind the services and install the toast keyframes.
    ///
    /// Safe to call more than once per surface: the style block is only
    /// inserted the first time.
    pub fn init(
        surface: Rc<dyn Surface>,
        timers: Rc<dyn Timers>,
        store: Rc<dyn KeyValueStore>,
        config: KitConfig,
    ) -> Self {
        match styles::install(surface.as_ref()) {
            Ok(installed) => debug!(installed, "toast animations ready"),
            Err(e) => warn!(error = %e, "toast animation install failed"),
        }
        Self {
            utils: Utils::new(surface, timers, config),
            storage: Storage::new(store),
        }
    }

    /// Bind to the current browser window: DOM surface, gloo timers,
    /// `localStorage`, config from defaults.
    #[cfg(feature = "hydrate")]
    pub fn browser() -> Result<Self, crate::error::InitError> {
        use crate::platform::DomSurface;
        use crate::store::LocalStore;
        use crate::timing::BrowserTimers;

        let surface = Rc::new(DomSurface::new()?);
        let store = Rc::new(LocalStore::open()?);
        Ok(Self::init(surface, Rc::new(BrowserTimers::new()), store, KitConfig::from_env()))
    }
}
