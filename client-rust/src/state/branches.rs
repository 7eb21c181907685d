#[cfg(test)]
#[path = "branches_test.rs"]
mod branches_test;

use std::collections::HashMap;

use dispatchboard::branch::{BranchRoster, BranchStatus};

/// Dashboard page session: the rendered roster and the latest status seen
/// per branch. Each poll tick overwrites a branch's entry wholesale; a
/// failed fetch leaves the prior entry untouched.
#[derive(Clone, Debug)]
pub struct BranchesState {
    pub roster: BranchRoster,
    pub statuses: HashMap<String, BranchStatus>,
    /// Timestamp label of the last completed refresh pass.
    pub last_update: Option<String>,
}

impl Default for BranchesState {
    fn default() -> Self {
        Self {
            roster: BranchRoster::deployed(),
            statuses: HashMap::new(),
            last_update: None,
        }
    }
}

impl BranchesState {
    /// Mirror one branch's polled status. Keys without a rendered card are
    /// dropped rather than stored.
    pub fn apply_status(&mut self, key: &str, status: BranchStatus) {
        if self.roster.get(key).is_some() {
            self.statuses.insert(key.to_owned(), status);
        }
    }

    pub fn status(&self, key: &str) -> Option<&BranchStatus> {
        self.statuses.get(key)
    }

    /// Card class, with the `disabled` visual state toggled from the last
    /// seen status.
    pub fn card_class(&self, key: &str) -> &'static str {
        match self.status(key) {
            Some(status) if status.is_disabled() => "branch-card disabled",
            _ => "branch-card",
        }
    }
}
