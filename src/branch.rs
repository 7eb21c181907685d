//! Branch identity and status presentation.

#[cfg(test)]
#[path = "branch_test.rs"]
mod branch_test;

use serde::{Deserialize, Serialize};

/// Poll interval for the status refresh loop, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 30_000;

/// A logical deployment unit of the dispatch service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub key: String,
    pub name: String,
}

impl Branch {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// Wire shape of `GET /api/branch/{key}/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchStatus {
    pub online: bool,
    pub status: String,
    pub message: String,
    pub enabled: bool,
}

impl BranchStatus {
    /// CSS class for the status badge.
    pub fn badge_class(&self) -> &'static str {
        if self.online {
            "status-badge status-online"
        } else {
            "status-badge status-offline"
        }
    }

    /// Whether the card carries the `disabled` visual state.
    pub fn is_disabled(&self) -> bool {
        !self.enabled
    }
}

/// Path of the status endpoint for a branch.
pub fn status_path(key: &str) -> String {
    format!("/api/branch/{key}/status")
}

/// Branch roster rendered on the dashboard. Exactly one branch per key;
/// inserting an existing key replaces the display name in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchRoster {
    branches: Vec<Branch>,
}

impl BranchRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The deployed branch set the panel ships with.
    pub fn deployed() -> Self {
        let mut roster = Self::new();
        roster.insert(Branch::new("tuc", "Tucson"));
        roster.insert(Branch::new("poc", "Pocatello"));
        roster.insert(Branch::new("rex", "Rexburg"));
        roster
    }

    pub fn insert(&mut self, branch: Branch) {
        if let Some(existing) = self.branches.iter_mut().find(|b| b.key == branch.key) {
            *existing = branch;
        } else {
            self.branches.push(branch);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
