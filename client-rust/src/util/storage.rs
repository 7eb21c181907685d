//! Console configuration persistence in `localStorage`.
//!
//! Reads the stored record at startup and writes it back only on explicit
//! save. Absent or corrupt data falls back to the default configuration.
//! Requires a browser environment.

use dispatchboard::config::PanelConfig;
#[cfg(feature = "hydrate")]
use dispatchboard::config::STORAGE_KEY;

/// Read the persisted configuration, or the default when nothing usable is
/// stored.
pub fn load_config() -> PanelConfig {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        stored
            .as_deref()
            .and_then(PanelConfig::from_stored)
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PanelConfig::default()
    }
}

/// Persist the configuration. Storage failures are ignored; the in-memory
/// record stays authoritative for the session.
pub fn save_config(config: &PanelConfig) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, &config.to_stored());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
