//! Admin dashboard page: branch cards with gated actions, an emergency
//! form for the selected branch, and the recordings viewer.

use leptos::prelude::*;

use dispatchboard::branch::Branch;

use crate::components::branch_card::BranchCard;
use crate::components::emergency_form::EmergencyForm;
use crate::components::recordings_panel::RecordingsPanel;
use crate::net::poller::{refresh_branches, spawn_status_poller};
use crate::state::branches::BranchesState;

/// Dashboard page. Owns the poll loop: spawned on mount, stopped on
/// unmount, with a manual refresh button for on-demand ticks.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let branches = expect_context::<RwSignal<BranchesState>>();
    let selected = RwSignal::new(Option::<Branch>::None);

    let poller = spawn_status_poller(branches);
    on_cleanup(move || poller.stop());

    let on_refresh = move |_| refresh_branches(branches);

    let roster: Vec<Branch> = branches.get_untracked().roster.iter().cloned().collect();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Branch Control Panel"</h1>
                <div class="dashboard-page__tools">
                    <button class="btn" on:click=on_refresh>
                        "Refresh Status"
                    </button>
                    <a href="/console" class="btn btn--secondary">
                        "Console"
                    </a>
                </div>
            </header>

            <p class="dashboard-page__updated">
                {move || {
                    branches
                        .get()
                        .last_update
                        .as_ref()
                        .map(|stamp| format!("Last updated: {stamp}"))
                        .unwrap_or_default()
                }}
            </p>

            <div class="branches-grid">
                {roster
                    .into_iter()
                    .map(|branch| view! { <BranchCard branch=branch selected=selected/> })
                    .collect::<Vec<_>>()}
            </div>

            {move || {
                selected
                    .get()
                    .map(|branch| view! { <EmergencyForm branch=branch/> })
            }}

            <RecordingsPanel/>
        </div>
    }
}
