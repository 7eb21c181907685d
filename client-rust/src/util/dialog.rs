//! Blocking browser dialogs.
//!
//! The gating logic itself lives in `dispatchboard::actions`; these are the
//! dialog mechanism the dashboard feeds it. Outside a browser every
//! question answers no, so no action can confirm.

/// Ask a yes/no question via `window.confirm`.
pub fn ask(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Show a blocking notice via `window.alert`.
pub fn notice(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
