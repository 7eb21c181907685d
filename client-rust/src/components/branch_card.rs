//! Branch card: status badge, message line, and the gated admin actions.

use leptos::prelude::*;

use dispatchboard::actions::{ActionKind, confirm_action};
use dispatchboard::branch::Branch;

use crate::state::branches::BranchesState;
use crate::state::recordings::RecordingsState;

/// One branch card on the dashboard grid.
///
/// The badge, message, and `disabled` state track the latest polled status;
/// a branch that has not answered yet shows a checking placeholder. Action
/// buttons run the confirmation gate before any network call.
#[component]
pub fn BranchCard(branch: Branch, selected: RwSignal<Option<Branch>>) -> impl IntoView {
    let branches = expect_context::<RwSignal<BranchesState>>();
    let recordings = expect_context::<RwSignal<RecordingsState>>();

    let key = branch.key.clone();
    let card_class = {
        let key = key.clone();
        move || branches.get().card_class(&key)
    };
    let badge_class = {
        let key = key.clone();
        move || {
            branches
                .get()
                .status(&key)
                .map_or("status-badge", |s| s.badge_class())
        }
    };
    let badge_text = {
        let key = key.clone();
        move || {
            branches
                .get()
                .status(&key)
                .map_or_else(|| "Checking...".to_owned(), |s| s.status.clone())
        }
    };
    let message = {
        let key = key.clone();
        move || {
            branches
                .get()
                .status(&key)
                .map(|s| s.message.clone())
                .unwrap_or_default()
        }
    };
    let is_enabled = {
        let key = key.clone();
        move || branches.get().status(&key).is_none_or(|s| !s.is_disabled())
    };

    let on_enable = {
        let branch = branch.clone();
        move |_| run_action(ActionKind::Enable, branch.clone())
    };
    let on_disable = {
        let branch = branch.clone();
        move |_| run_action(ActionKind::Disable, branch.clone())
    };
    let on_restart = {
        let branch = branch.clone();
        move |_| run_action(ActionKind::Restart, branch.clone())
    };
    let on_trigger = {
        let branch = branch.clone();
        move |_| selected.set(Some(branch.clone()))
    };
    let on_recordings = {
        let key = key.clone();
        move |_| crate::components::recordings_panel::load_recordings(recordings, key.clone(), 0)
    };

    view! {
        <div class=card_class data-branch=branch.key.clone()>
            <div class="branch-card__header">
                <h2>{branch.name.clone()}</h2>
                <span class=badge_class>{badge_text}</span>
            </div>
            <p class="branch-message">{message}</p>
            <div class="branch-card__actions">
                <Show
                    when=is_enabled
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=on_enable.clone()>
                                "Enable"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--danger" on:click=on_disable.clone()>
                        "Disable"
                    </button>
                </Show>
                <button class="btn" on:click=on_restart>
                    "Restart"
                </button>
                <button class="btn" on:click=on_trigger>
                    "Trigger Emergency"
                </button>
                <button class="btn" on:click=on_recordings>
                    "Call Recordings"
                </button>
            </div>
        </div>
    }
}

/// Gate, then submit, one branch action. Declining any prompt is the end of
/// it; nothing is sent. Restart shows its blocking notice between the gate
/// and the request.
fn run_action(kind: ActionKind, branch: Branch) {
    if !confirm_action(kind, &branch.name, crate::util::dialog::ask) {
        return;
    }
    if kind == ActionKind::Restart {
        crate::util::dialog::notice(
            "Restarting container... Please wait. This may take 10-30 seconds.",
        );
    }
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::post_branch_action(kind, &branch.key).await {
                Ok(outcome) if outcome.is_success() => {
                    crate::util::dialog::notice(&format!(
                        "{}\n\nAn SMS notification has been sent.",
                        outcome.success_text()
                    ));
                    crate::util::reload::schedule(kind.reload_delay_ms());
                }
                Ok(outcome) => {
                    crate::util::dialog::notice(&format!("Error: {}", outcome.failure_text()));
                }
                Err(error) => {
                    crate::util::dialog::notice(&format!("Error: {error}"));
                }
            }
        });
    }
}
