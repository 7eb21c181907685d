#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use dispatchboard::config::PanelConfig;
use dispatchboard::console::{ResponseTone, ServiceStatus};
use dispatchboard::timeline::TimelineEvent;

/// One timestamped line in the console's response area. The area shows the
/// outcome of the latest user action only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseLine {
    pub text: String,
    pub tone: ResponseTone,
}

/// Console page session: the persisted configuration plus everything the
/// page currently displays.
#[derive(Clone, Debug, Default)]
pub struct ConsoleState {
    pub config: PanelConfig,
    pub status: Option<ServiceStatus>,
    /// Set when the last status refresh could not reach the service.
    pub connection_error: bool,
    pub last_updated: Option<String>,
    pub response: Option<ResponseLine>,
    pub timeline: Vec<TimelineEvent>,
    pub timeline_loaded: bool,
}

impl ConsoleState {
    /// Replace the response area with one timestamped line.
    pub fn respond(&mut self, tone: ResponseTone, stamp: &str, text: impl Into<String>) {
        self.response = Some(ResponseLine {
            text: format!("[{stamp}] {}", text.into()),
            tone,
        });
    }

    pub fn apply_status(&mut self, status: ServiceStatus, stamp: &str) {
        self.status = Some(status);
        self.connection_error = false;
        self.last_updated = Some(stamp.to_owned());
    }

    /// Status refresh failed at the transport level: show the error state
    /// naming the unreachable base URL.
    pub fn apply_status_failure(&mut self) {
        self.status = None;
        self.connection_error = true;
    }

    /// Status card heading and class for the current state.
    pub fn status_text(&self) -> (String, String) {
        if self.connection_error {
            (
                "Connection Error".to_owned(),
                "status-text status-Error".to_owned(),
            )
        } else {
            match &self.status {
                Some(status) => (status.status_label().to_owned(), status.status_class()),
                None => ("Unknown".to_owned(), "status-text status-Unknown".to_owned()),
            }
        }
    }

    /// Status card message line.
    pub fn status_message(&self) -> String {
        if self.connection_error {
            format!("Could not connect to {}", self.config.api_url)
        } else {
            match &self.status {
                Some(status) => status.message_label().to_owned(),
                None => "No message available".to_owned(),
            }
        }
    }

    pub fn apply_timeline(&mut self, events: Vec<TimelineEvent>) {
        self.timeline = events;
        self.timeline_loaded = true;
    }
}
