//! Timeline list scraped from the service's status page.

use leptos::prelude::*;

use dispatchboard::timeline::{EMPTY_PLACEHOLDER, EventKind, TimelineEvent};

use crate::state::console::ConsoleState;

/// Rendered timeline. Empty until a load completes; an empty extraction
/// shows the placeholder rather than nothing.
#[component]
pub fn TimelinePanel() -> impl IntoView {
    let console = expect_context::<RwSignal<ConsoleState>>();

    view! {
        <div class="timeline">
            {move || {
                let state = console.get();
                if !state.timeline_loaded {
                    return None;
                }
                if state.timeline.is_empty() {
                    return Some(
                        view! { <p class="placeholder">{EMPTY_PLACEHOLDER}</p> }.into_any(),
                    );
                }
                Some(
                    view! {
                        <div class="timeline__events">
                            {state.timeline.iter().map(timeline_event).collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any(),
                )
            }}
        </div>
    }
}

fn timeline_event(event: &TimelineEvent) -> impl IntoView {
    let class = match event.kind {
        EventKind::Success => "timeline-event success",
        EventKind::Error => "timeline-event error",
    };
    view! {
        <div class=class>
            <div class="event-header">
                <span class="event-title">"Emergency Event"</span>
                <span class="event-timestamp">{event.time.clone()}</span>
            </div>
            <div class="event-details">{event.details.clone()}</div>
        </div>
    }
}
