//! Wire shapes and input validation for the standalone console.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use serde::Deserialize;
use thiserror::Error;

/// Wire shape of `GET {api}/api/status`. Both fields are optional on the
/// wire; display falls back to placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceStatus {
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Unknown")
    }

    pub fn message_label(&self) -> &str {
        self.message.as_deref().unwrap_or("No message available")
    }

    /// CSS class for the status text, keyed by the reported status value.
    pub fn status_class(&self) -> String {
        format!("status-text status-{}", self.status_label())
    }
}

/// Wire shape of `GET {api}/debug_firehose`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FirehoseReport {
    pub timeline_count: u64,
    pub target: String,
}

/// Wire shape of `POST {api}/webhook`. The webhook replies with `status`
/// rather than a `success` flag; the HTTP status line is the success signal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WebhookReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WebhookUrlError {
    #[error("Webhook URL is required")]
    Empty,
    #[error("Webhook URL must start with http:// or https://")]
    Scheme,
}

/// Validate a replay target for the debug firehose. Prefix check only; the
/// service forwards its event log to whatever URL passes.
pub fn validate_webhook_url(raw: &str) -> Result<&str, WebhookUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WebhookUrlError::Empty);
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(WebhookUrlError::Scheme);
    }
    Ok(trimmed)
}

/// Tone of a console response-area line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseTone {
    #[default]
    Info,
    Success,
    Error,
}

impl ResponseTone {
    /// CSS class for the response line; info lines are unstyled.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "success-message",
            Self::Error => "error-message",
        }
    }
}
