#[cfg(test)]
#[path = "recordings_test.rs"]
mod recordings_test;

use dispatchboard::recordings::{LoadGuard, PageControls, Recording, RecordingsPage};

/// Recordings viewer session. One in-flight guard serializes loads across
/// every branch; a load attempted while one is outstanding is ignored.
#[derive(Clone, Debug, Default)]
pub struct RecordingsState {
    /// Branch whose recordings are shown, once a load has been requested.
    pub branch_key: Option<String>,
    pub page: usize,
    pub items: Vec<Recording>,
    /// Record count of the last successful page, feeding the has-more
    /// heuristic.
    pub last_count: usize,
    pub error: Option<String>,
    pub loaded: bool,
    guard: LoadGuard,
}

impl RecordingsState {
    /// Claim the in-flight guard for a new load. `false` means a load is
    /// already outstanding and the caller must do nothing.
    pub fn begin(&mut self) -> bool {
        if !self.guard.try_begin() {
            return false;
        }
        self.error = None;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.guard.is_loading()
    }

    /// Store a resolved page and release the guard.
    pub fn apply_page(&mut self, key: &str, page: usize, response: RecordingsPage) {
        self.guard.finish();
        if response.success {
            self.branch_key = Some(key.to_owned());
            self.page = page;
            self.last_count = response.count;
            self.items = response.recordings;
            self.loaded = true;
        } else {
            self.error = Some(response.failure_text().to_owned());
            self.items.clear();
            self.loaded = true;
        }
    }

    /// Record a transport failure and release the guard. The previously
    /// rendered list stays as it was.
    pub fn apply_failure(&mut self, message: String) {
        self.guard.finish();
        self.error = Some(message);
    }

    /// Pagination controls for the rendered page, absent until a page has
    /// loaded successfully.
    pub fn controls(&self) -> Option<PageControls> {
        (self.loaded && self.error.is_none())
            .then(|| PageControls::for_page(self.page, self.last_count))
    }
}
