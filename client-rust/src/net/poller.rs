//! Status polling loops.
//!
//! Each page spawns its poller on mount and stops it on unmount through the
//! returned handle. A tick is an independent full re-fetch: every branch is
//! requested anew, responses land in whatever order they resolve, and a
//! branch whose request fails keeps its previously displayed state.

#[cfg(feature = "hydrate")]
use dispatchboard::branch::POLL_INTERVAL_MS;
#[cfg(feature = "hydrate")]
use dispatchboard::console::ResponseTone;
use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, Update};

use crate::state::branches::BranchesState;
use crate::state::console::ConsoleState;

/// Stops a polling loop. The loop checks the flag each wake-up, so a stop
/// takes effect at the next tick boundary; the in-flight tick is never
/// aborted.
#[derive(Clone)]
pub struct PollerHandle {
    stop: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

impl PollerHandle {
    fn new() -> Self {
        Self {
            stop: std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false)),
        }
    }

    pub fn stop(&self) {
        self.stop.store(true, std::sync::atomic::Ordering::Relaxed);
    }
}

/// Spawn the dashboard poller: refresh every branch now, then every 30
/// seconds until stopped.
pub fn spawn_status_poller(branches: RwSignal<BranchesState>) -> PollerHandle {
    let handle = PollerHandle::new();
    #[cfg(feature = "hydrate")]
    {
        refresh_branches(branches);
        let stop = handle.stop.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    POLL_INTERVAL_MS,
                )))
                .await;
                if stop.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_branches(branches);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = branches;
    }
    handle
}

/// Fire one status request per rendered branch. Requests run concurrently
/// and update each card independently; per-branch failures are logged and
/// change nothing on screen.
pub fn refresh_branches(branches: RwSignal<BranchesState>) {
    #[cfg(feature = "hydrate")]
    {
        let roster: Vec<_> = branches.get_untracked().roster.iter().cloned().collect();
        for branch in roster {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_branch_status(&branch.key).await {
                    Ok(status) => branches.update(|s| s.apply_status(&branch.key, status)),
                    Err(error) => {
                        leptos::logging::warn!("Error updating {}: {error}", branch.key);
                    }
                }
            });
        }
        branches.update(|s| s.last_update = Some(crate::util::clock::now_label()));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = branches;
    }
}

/// Spawn the console poller: refresh the service status now, then every 30
/// seconds until stopped.
pub fn spawn_console_poller(console: RwSignal<ConsoleState>) -> PollerHandle {
    let handle = PollerHandle::new();
    #[cfg(feature = "hydrate")]
    {
        let stop = handle.stop.clone();
        leptos::task::spawn_local(async move {
            refresh_service_status(console).await;
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    POLL_INTERVAL_MS,
                )))
                .await;
                if stop.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_service_status(console).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = console;
    }
    handle
}

/// Fire one console status refresh from a UI handler.
pub fn request_status_refresh(console: RwSignal<ConsoleState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(refresh_service_status(console));
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = console;
    }
}

/// One console status refresh, reporting its outcome in the response area.
pub async fn refresh_service_status(console: RwSignal<ConsoleState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::clock::now_label;

        let config = console.get_untracked().config.clone();
        console.update(|s| s.respond(ResponseTone::Info, &now_label(), "Fetching status..."));
        match crate::net::api::fetch_service_status(&config).await {
            Ok(status) => console.update(|s| {
                let stamp = now_label();
                let label = status.status_label().to_owned();
                s.apply_status(status, &stamp);
                s.respond(
                    ResponseTone::Success,
                    &stamp,
                    format!("Status retrieved: {label}"),
                );
            }),
            Err(error) => console.update(|s| {
                s.apply_status_failure();
                s.respond(
                    ResponseTone::Error,
                    &now_label(),
                    format!("Error fetching status: {error}"),
                );
            }),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = console;
    }
}
