//! Timeline extraction from the collaborator's server-rendered status page.
//!
//! The dispatch service exposes no structured timeline endpoint; the status
//! page HTML is the only source. Events are recovered by scanning for the
//! known class names (`.call`, `.call-time`, `.call-details`) rather than by
//! full HTML parsing, and the scan is tolerant: blocks missing either child
//! are skipped, unclosed elements run to the end of the document.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

/// Classification of a timeline entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Success,
    Error,
}

/// One entry recovered from the status page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineEvent {
    pub time: String,
    pub details: String,
    pub kind: EventKind,
}

/// Placeholder when the page yields no events.
pub const EMPTY_PLACEHOLDER: &str = "No recent events found";

/// An entry is an error iff its details mention "error" or "failed",
/// case-insensitively.
pub fn classify(details: &str) -> EventKind {
    let lower = details.to_lowercase();
    if lower.contains("error") || lower.contains("failed") {
        EventKind::Error
    } else {
        EventKind::Success
    }
}

/// Extract timeline events from status-page HTML.
pub fn extract_events(html: &str) -> Vec<TimelineEvent> {
    let mut events = Vec::new();
    let mut cursor = 0;
    while let Some(tag) = find_tag_with_class(html, cursor, "call") {
        let block_end = element_end(html, tag.content_start, tag.name);
        let block = &html[tag.content_start..block_end];
        cursor = block_end.max(tag.content_start);

        let time = first_text_of_class(block, "call-time");
        let details = first_text_of_class(block, "call-details");
        let (Some(time), Some(details)) = (time, details) else {
            continue;
        };
        events.push(TimelineEvent {
            kind: classify(&details),
            time,
            details,
        });
    }
    events
}

struct TagAt<'a> {
    name: &'a str,
    content_start: usize,
}

/// Find the next opening tag whose class list contains `class` as an exact
/// token, starting the search at `from`.
fn find_tag_with_class<'a>(html: &'a str, from: usize, class: &str) -> Option<TagAt<'a>> {
    let mut i = from;
    while i < html.len() {
        let Some(open) = html[i..].find('<').map(|o| i + o) else {
            return None;
        };
        let Some(close) = html[open..].find('>').map(|c| open + c) else {
            return None;
        };
        let inside = &html[open + 1..close];
        i = close + 1;
        if inside.starts_with('/') || inside.starts_with('!') {
            continue;
        }
        let name = inside
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("");
        if name.is_empty() {
            continue;
        }
        if let Some(classes) = attribute_value(inside, "class") {
            if classes.split_whitespace().any(|token| token == class) {
                return Some(TagAt {
                    name,
                    content_start: close + 1,
                });
            }
        }
    }
    None
}

/// Value of a quoted attribute inside a tag body, if present.
fn attribute_value<'a>(tag_body: &'a str, attribute: &str) -> Option<&'a str> {
    let mut search = 0;
    while let Some(offset) = tag_body[search..].find(attribute) {
        let at = search + offset;
        search = at + attribute.len();
        // Require `attribute=` followed by a quote, not a substring of a
        // longer attribute name.
        if at > 0
            && !tag_body[..at]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
        {
            continue;
        }
        let rest = &tag_body[at + attribute.len()..];
        let rest = rest.trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let quote = rest.chars().next()?;
        if quote != '"' && quote != '\'' {
            continue;
        }
        let value = &rest[1..];
        return value.find(quote).map(|end| &value[..end]);
    }
    None
}

/// Index where the element opened before `content_start` closes, counting
/// nested same-name tags. Unclosed elements run to the end of the document.
fn element_end(html: &str, content_start: usize, name: &str) -> usize {
    let mut depth = 1usize;
    let mut i = content_start;
    while i < html.len() {
        let Some(open) = html[i..].find('<').map(|o| i + o) else {
            break;
        };
        let Some(close) = html[open..].find('>').map(|c| open + c) else {
            break;
        };
        let inside = &html[open + 1..close];
        if let Some(closing) = inside.strip_prefix('/') {
            if closing.trim() == name {
                depth -= 1;
                if depth == 0 {
                    return open;
                }
            }
        } else {
            let opened = inside
                .split(|c: char| c.is_whitespace() || c == '/')
                .next()
                .unwrap_or("");
            if opened == name && !inside.ends_with('/') {
                depth += 1;
            }
        }
        i = close + 1;
    }
    html.len()
}

/// Text content of the first element carrying `class` inside `block`,
/// normalized to single-spaced trimmed text.
fn first_text_of_class(block: &str, class: &str) -> Option<String> {
    let tag = find_tag_with_class(block, 0, class)?;
    let end = element_end(block, tag.content_start, tag.name);
    let text = text_content(&block[tag.content_start..end]);
    Some(text)
}

/// Concatenated text outside of tag markup, entity-decoded and normalized.
fn text_content(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut rest = fragment;
    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = "";
                break;
            }
        }
    }
    text.push_str(rest);
    let decoded = decode_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the handful of named entities the status page emits. `&amp;` goes
/// last so `&amp;lt;` decodes to the literal `&lt;`.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
