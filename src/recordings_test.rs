use super::*;

// =============================================================
// Pagination controls
// =============================================================

#[test]
fn first_page_hides_previous() {
    let controls = PageControls::for_page(0, PAGE_SIZE);
    assert_eq!(controls.previous, None);
    assert_eq!(controls.label, 1);
}

#[test]
fn later_pages_show_previous() {
    let controls = PageControls::for_page(3, 5);
    assert_eq!(controls.previous, Some(2));
    assert_eq!(controls.label, 4);
}

#[test]
fn full_page_shows_next() {
    let controls = PageControls::for_page(0, PAGE_SIZE);
    assert_eq!(controls.next, Some(1));
}

#[test]
fn partial_page_hides_next() {
    let controls = PageControls::for_page(0, PAGE_SIZE - 1);
    assert_eq!(controls.next, None);
}

#[test]
fn empty_page_shows_no_controls_beyond_label() {
    let controls = PageControls::for_page(0, 0);
    assert_eq!(controls.previous, None);
    assert_eq!(controls.next, None);
    assert_eq!(controls.label, 1);
}

// =============================================================
// Load guard
// =============================================================

#[test]
fn guard_serializes_concurrent_loads() {
    let mut guard = LoadGuard::new();
    assert!(guard.try_begin());
    assert!(guard.is_loading());
    assert!(!guard.try_begin());
    guard.finish();
    assert!(guard.try_begin());
}

#[test]
fn guard_releases_on_finish_even_without_success() {
    let mut guard = LoadGuard::new();
    assert!(guard.try_begin());
    guard.finish();
    assert!(!guard.is_loading());
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn page_path_includes_fixed_page_size() {
    assert_eq!(
        page_path("sf", 2),
        "/api/branch/sf/recordings?page=2&page_size=20"
    );
}

#[test]
fn recordings_page_deserializes() {
    let page: RecordingsPage = serde_json::from_str(
        r#"{
            "success": true,
            "recordings": [{
                "from": "+15550001111",
                "to": "+15552223333",
                "date_created": "2025-06-01T18:12:03Z",
                "duration": "42",
                "status": "completed",
                "media_url": "https://api.example.com/rec/RE1.mp3",
                "sid": "RE1"
            }],
            "count": 1
        }"#,
    )
    .unwrap();
    assert!(page.success);
    assert_eq!(page.count, 1);
    assert_eq!(page.recordings[0].sid, "RE1");
    assert_eq!(page.recordings[0].duration_label(), "42 seconds");
}

#[test]
fn missing_duration_labels_as_not_available() {
    let recording = Recording {
        duration: None,
        ..Recording::default()
    };
    assert_eq!(recording.duration_label(), "N/A");
    assert_eq!(recording.date_label(), "Unknown");
}

#[test]
fn failure_text_defaults_when_error_missing() {
    let page = RecordingsPage::default();
    assert_eq!(page.failure_text(), "Failed to load recordings");
}
