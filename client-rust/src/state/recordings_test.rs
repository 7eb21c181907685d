use super::*;

fn page_of(count: usize) -> RecordingsPage {
    let recording = Recording {
        from: "+15550001111".to_owned(),
        to: "+15552223333".to_owned(),
        date_created: Some("2025-06-01T18:12:03Z".to_owned()),
        duration: Some("42".to_owned()),
        status: "completed".to_owned(),
        media_url: "https://api.example.com/rec.mp3".to_owned(),
        sid: "RE1".to_owned(),
    };
    RecordingsPage {
        success: true,
        recordings: vec![recording; count],
        count,
        error: None,
    }
}

// =============================================================
// In-flight guard
// =============================================================

#[test]
fn second_load_attempt_while_in_flight_is_ignored() {
    let mut state = RecordingsState::default();
    assert!(state.begin());
    assert!(!state.begin());
}

#[test]
fn guard_releases_after_page_applies() {
    let mut state = RecordingsState::default();
    assert!(state.begin());
    state.apply_page("tuc", 0, page_of(3));
    assert!(!state.is_loading());
    assert!(state.begin());
}

#[test]
fn guard_releases_after_transport_failure() {
    let mut state = RecordingsState::default();
    assert!(state.begin());
    state.apply_failure("connection reset".to_owned());
    assert!(state.begin());
}

// =============================================================
// Page application
// =============================================================

#[test]
fn successful_page_replaces_items() {
    let mut state = RecordingsState::default();
    state.begin();
    state.apply_page("tuc", 2, page_of(5));
    assert_eq!(state.branch_key.as_deref(), Some("tuc"));
    assert_eq!(state.page, 2);
    assert_eq!(state.items.len(), 5);
    assert!(state.loaded);
    assert!(state.error.is_none());
}

#[test]
fn application_failure_clears_items_and_records_error() {
    let mut state = RecordingsState::default();
    state.begin();
    state.apply_page(
        "tuc",
        0,
        RecordingsPage {
            success: false,
            error: Some("Twilio unavailable".to_owned()),
            ..RecordingsPage::default()
        },
    );
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("Twilio unavailable"));
}

#[test]
fn transport_failure_keeps_previous_items() {
    let mut state = RecordingsState::default();
    state.begin();
    state.apply_page("tuc", 0, page_of(3));
    state.begin();
    state.apply_failure("timeout".to_owned());
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.error.as_deref(), Some("timeout"));
}

// =============================================================
// Pagination controls
// =============================================================

#[test]
fn controls_absent_before_first_load() {
    assert!(RecordingsState::default().controls().is_none());
}

#[test]
fn full_page_shows_next_control() {
    let mut state = RecordingsState::default();
    state.begin();
    state.apply_page("tuc", 0, page_of(20));
    let controls = state.controls().unwrap();
    assert_eq!(controls.next, Some(1));
    assert_eq!(controls.previous, None);
}

#[test]
fn partial_later_page_shows_only_previous() {
    let mut state = RecordingsState::default();
    state.begin();
    state.apply_page("tuc", 1, page_of(7));
    let controls = state.controls().unwrap();
    assert_eq!(controls.next, None);
    assert_eq!(controls.previous, Some(0));
    assert_eq!(controls.label, 2);
}
