use super::*;

// =============================================================
// ServiceStatus display
// =============================================================

#[test]
fn status_labels_fall_back_to_placeholders() {
    let status = ServiceStatus::default();
    assert_eq!(status.status_label(), "Unknown");
    assert_eq!(status.message_label(), "No message available");
    assert_eq!(status.status_class(), "status-text status-Unknown");
}

#[test]
fn reported_status_feeds_label_and_class() {
    let status: ServiceStatus =
        serde_json::from_str(r#"{"status":"Running","message":"All clear"}"#).unwrap();
    assert_eq!(status.status_label(), "Running");
    assert_eq!(status.message_label(), "All clear");
    assert_eq!(status.status_class(), "status-text status-Running");
}

// =============================================================
// Webhook URL validation
// =============================================================

#[test]
fn http_and_https_urls_are_accepted() {
    assert_eq!(
        validate_webhook_url("http://hooks.example.com/a"),
        Ok("http://hooks.example.com/a")
    );
    assert_eq!(
        validate_webhook_url(" https://hooks.example.com/a "),
        Ok("https://hooks.example.com/a")
    );
}

#[test]
fn empty_webhook_url_is_rejected() {
    assert_eq!(validate_webhook_url("  "), Err(WebhookUrlError::Empty));
}

#[test]
fn other_schemes_are_rejected() {
    assert_eq!(
        validate_webhook_url("ftp://hooks.example.com"),
        Err(WebhookUrlError::Scheme)
    );
    assert_eq!(
        validate_webhook_url("hooks.example.com"),
        Err(WebhookUrlError::Scheme)
    );
}

// =============================================================
// Firehose report
// =============================================================

#[test]
fn firehose_report_deserializes() {
    let report: FirehoseReport =
        serde_json::from_str(r#"{"timeline_count":12,"target":"https://h.example.com"}"#).unwrap();
    assert_eq!(report.timeline_count, 12);
    assert_eq!(report.target, "https://h.example.com");
}

// =============================================================
// Response tones
// =============================================================

#[test]
fn tone_css_classes() {
    assert_eq!(ResponseTone::Info.css_class(), "");
    assert_eq!(ResponseTone::Success.css_class(), "success-message");
    assert_eq!(ResponseTone::Error.css_class(), "error-message");
}
