//! Full page reloads, optionally delayed.

/// Reload the page after `delay_ms`. A zero delay reloads immediately; a
/// positive delay gives the remote side time to settle first (restart waits
/// 3 s for the container, trigger waits 1 s so the outcome is readable).
pub fn schedule(delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if delay_ms > 0 {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms)))
                    .await;
            }
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay_ms;
    }
}
