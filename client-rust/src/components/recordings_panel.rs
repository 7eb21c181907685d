//! Paginated call-recordings viewer.

use leptos::prelude::*;

use dispatchboard::recordings::{EMPTY_PLACEHOLDER, Recording};

use crate::state::recordings::RecordingsState;

/// Start loading one page of recordings for a branch. A call while another
/// load is in flight is ignored outright, whatever branch it names.
pub fn load_recordings(recordings: RwSignal<RecordingsState>, key: String, page: usize) {
    let mut started = false;
    recordings.update(|s| started = s.begin());
    if !started {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_recordings(&key, page).await {
                Ok(response) => recordings.update(|s| s.apply_page(&key, page, response)),
                Err(error) => {
                    leptos::logging::warn!("Error loading recordings: {error}");
                    recordings
                        .update(|s| s.apply_failure(format!("Error loading recordings: {error}")));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, page);
        recordings.update(|s| s.apply_failure("not available on server".to_owned()));
    }
}

/// Recordings list with loading indicator, error line, placeholder, and the
/// pagination controls derived from the last page's record count.
#[component]
pub fn RecordingsPanel() -> impl IntoView {
    let recordings = expect_context::<RwSignal<RecordingsState>>();

    let heading = move || {
        recordings
            .get()
            .branch_key
            .as_deref()
            .map_or_else(|| "Call Recordings".to_owned(), |key| {
                format!("Call Recordings ({key})")
            })
    };

    let on_previous = move |_| {
        let state = recordings.get_untracked();
        if let (Some(key), Some(controls)) = (state.branch_key.clone(), state.controls()) {
            if let Some(page) = controls.previous {
                load_recordings(recordings, key, page);
            }
        }
    };
    let on_next = move |_| {
        let state = recordings.get_untracked();
        if let (Some(key), Some(controls)) = (state.branch_key.clone(), state.controls()) {
            if let Some(page) = controls.next {
                load_recordings(recordings, key, page);
            }
        }
    };

    view! {
        <section class="recordings-panel">
            <h2>{heading}</h2>

            <Show when=move || recordings.get().is_loading()>
                <p class="recordings-loading">"Loading recordings..."</p>
            </Show>

            <Show when=move || recordings.get().error.is_some()>
                <p class="error-message">
                    {move || recordings.get().error.clone().unwrap_or_default()}
                </p>
            </Show>

            {move || {
                let state = recordings.get();
                if !state.loaded || state.error.is_some() {
                    return None;
                }
                if state.items.is_empty() {
                    return Some(
                        view! { <p class="recordings-empty">{EMPTY_PLACEHOLDER}</p> }.into_any(),
                    );
                }
                Some(
                    view! {
                        <div class="recordings-list">
                            {state
                                .items
                                .iter()
                                .map(|r| recording_item(r))
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any(),
                )
            }}

            {move || {
                recordings
                    .get()
                    .controls()
                    .map(|controls| {
                        view! {
                            <div class="recordings-pagination">
                                <Show when=move || controls.previous.is_some()>
                                    <button class="btn" on:click=on_previous>
                                        "Previous"
                                    </button>
                                </Show>
                                <span class="recordings-pagination__label">
                                    {format!("Page {}", controls.label)}
                                </span>
                                <Show when=move || controls.next.is_some()>
                                    <button class="btn" on:click=on_next>
                                        "Next"
                                    </button>
                                </Show>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

/// One recording: route, metadata line, inline player, download link.
fn recording_item(recording: &Recording) -> impl IntoView {
    view! {
        <div class="recording-item">
            <div class="recording-item__route">
                {format!("{} to {}", recording.from, recording.to)}
            </div>
            <div class="recording-item__meta">
                <span>{recording.date_label().to_owned()}</span>
                <span>{recording.duration_label()}</span>
                <span>{recording.status.clone()}</span>
            </div>
            <audio controls>
                <source src=recording.media_url.clone() type="audio/mpeg"/>
                "Your browser does not support the audio element."
            </audio>
            <div class="recording-item__links">
                <a href=recording.media_url.clone() download class="btn btn--secondary">
                    "Download"
                </a>
                <span class="recording-item__sid">{format!("SID: {}", recording.sid)}</span>
            </div>
        </div>
    }
}
