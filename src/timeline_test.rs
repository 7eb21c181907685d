use super::*;

const STATUS_PAGE: &str = r#"
<html><body>
  <div class="timeline">
    <div class="call">
      <div class="call-time">Jun 01, 06:12:03 PM</div>
      <div class="call-details">Webhook received for <b>+15550001111</b></div>
    </div>
    <div class="call">
      <div class="call-time">Jun 01, 06:10:41 PM</div>
      <div class="call-details">Transfer FAILED after 2 attempts</div>
    </div>
  </div>
</body></html>
"#;

// =============================================================
// Classification
// =============================================================

#[test]
fn plain_details_classify_as_success() {
    assert_eq!(classify("Webhook received"), EventKind::Success);
}

#[test]
fn error_keyword_classifies_as_error_case_insensitively() {
    assert_eq!(classify("Twilio ERROR 21211"), EventKind::Error);
    assert_eq!(classify("call Failed to connect"), EventKind::Error);
}

#[test]
fn error_keyword_matches_inside_words() {
    // Substring match, exactly as the page scanner always behaved.
    assert_eq!(classify("errors resolved"), EventKind::Error);
}

// =============================================================
// Extraction
// =============================================================

#[test]
fn extracts_every_call_block() {
    let events = extract_events(STATUS_PAGE);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].time, "Jun 01, 06:12:03 PM");
    assert_eq!(events[0].details, "Webhook received for +15550001111");
    assert_eq!(events[0].kind, EventKind::Success);
    assert_eq!(events[1].kind, EventKind::Error);
}

#[test]
fn nested_markup_contributes_text_only() {
    let html = r#"<div class="call">
        <span class="call-time">now</span>
        <span class="call-details">a <em>b</em> c</span>
    </div>"#;
    let events = extract_events(html);
    assert_eq!(events[0].details, "a b c");
}

#[test]
fn block_missing_time_or_details_is_skipped() {
    let html = r#"
        <div class="call"><div class="call-time">only time</div></div>
        <div class="call">
            <div class="call-time">t</div>
            <div class="call-details">d</div>
        </div>"#;
    let events = extract_events(html);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].time, "t");
}

#[test]
fn class_token_match_is_exact() {
    // `.call-time` alone must not count as a `.call` block.
    let html = r#"<div class="call-time">orphan</div>"#;
    assert!(extract_events(html).is_empty());
}

#[test]
fn multi_class_attribute_matches() {
    let html = r#"<div class="call resolved">
        <div class="call-time">t</div>
        <div class="call-details">d</div>
    </div>"#;
    assert_eq!(extract_events(html).len(), 1);
}

#[test]
fn entities_are_decoded() {
    let html = r#"<div class="call">
        <div class="call-time">t</div>
        <div class="call-details">Smith &amp; Sons &lt;furnace&gt;</div>
    </div>"#;
    let events = extract_events(html);
    assert_eq!(events[0].details, "Smith & Sons <furnace>");
}

#[test]
fn whitespace_is_normalized() {
    let html = "<div class=\"call\">\n  <div class=\"call-time\">  Jun 01,\n  06:12 PM  </div>\n  <div class=\"call-details\">line one\n        line two</div>\n</div>";
    let events = extract_events(html);
    assert_eq!(events[0].time, "Jun 01, 06:12 PM");
    assert_eq!(events[0].details, "line one line two");
}

#[test]
fn unclosed_block_runs_to_document_end() {
    let html = r#"<div class="call">
        <div class="call-time">t</div>
        <div class="call-details">still open"#;
    let events = extract_events(html);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].details, "still open");
}

#[test]
fn empty_page_yields_no_events() {
    assert!(extract_events("<html><body></body></html>").is_empty());
    assert!(extract_events("").is_empty());
}

#[test]
fn single_quoted_class_attributes_match() {
    let html = "<div class='call'><i class='call-time'>t</i><i class='call-details'>d</i></div>";
    assert_eq!(extract_events(html).len(), 1);
}
