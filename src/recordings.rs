//! Call-recording records and fixed-size pagination.

#[cfg(test)]
#[path = "recordings_test.rs"]
mod recordings_test;

use serde::{Deserialize, Serialize};

/// Fixed page size for recordings requests.
pub const PAGE_SIZE: usize = 20;

/// A call recording as reported by the dispatch service. Read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    pub status: String,
    pub media_url: String,
    pub sid: String,
}

impl Recording {
    /// Duration label; recordings still in progress report none.
    pub fn duration_label(&self) -> String {
        match &self.duration {
            Some(seconds) => format!("{seconds} seconds"),
            None => "N/A".to_owned(),
        }
    }

    pub fn date_label(&self) -> &str {
        self.date_created.as_deref().unwrap_or("Unknown")
    }
}

/// Wire shape of `GET /api/branch/{key}/recordings`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RecordingsPage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recordings: Vec<Recording>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub error: Option<String>,
}

impl RecordingsPage {
    pub fn failure_text(&self) -> &str {
        self.error.as_deref().unwrap_or("Failed to load recordings")
    }
}

/// Placeholder shown for an empty result set.
pub const EMPTY_PLACEHOLDER: &str = "No call recordings found for this branch";

/// Path plus query of the recordings endpoint for one page.
pub fn page_path(key: &str, page: usize) -> String {
    format!("/api/branch/{key}/recordings?page={page}&page_size={PAGE_SIZE}")
}

/// Which pagination controls a rendered page shows.
///
/// `next` is a heuristic has-more signal: a full page suggests another one,
/// so a final page of exactly [`PAGE_SIZE`] records over-shows the control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageControls {
    pub previous: Option<usize>,
    pub next: Option<usize>,
    /// 1-based page number for the page label.
    pub label: usize,
}

impl PageControls {
    pub fn for_page(page: usize, returned_count: usize) -> Self {
        Self {
            previous: page.checked_sub(1),
            next: (returned_count >= PAGE_SIZE).then_some(page + 1),
            label: page + 1,
        }
    }
}

/// Serializes page loads: a load attempted while another is outstanding is
/// a no-op, not queued. One guard covers all branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadGuard {
    loading: bool,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard. Returns `false` when a load is already in flight,
    /// in which case the caller must do nothing.
    pub fn try_begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Release the guard once the in-flight load resolves, success or not.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
