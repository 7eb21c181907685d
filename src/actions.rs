//! Confirmation-gated action gateway.
//!
//! Every state-changing call goes through a [`ConfirmationGate`]: a small
//! state machine that tracks how many confirmations an action still needs.
//! The gate knows nothing about dialog boxes; the browser front end feeds it
//! `window.confirm` answers and the CLI feeds it stdin answers, and neither
//! may issue the network call unless the gate reports confirmed.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use serde::Deserialize;
use serde_json::{Value, json};

/// Administrative actions the panel can submit for a branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Enable,
    Disable,
    Restart,
    Trigger,
}

impl ActionKind {
    /// URL verb, also the action's wire name.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Restart => "restart",
            Self::Trigger => "trigger",
        }
    }

    /// Path of the action endpoint for a branch.
    pub fn path(self, key: &str) -> String {
        format!("/api/branch/{key}/{}", self.verb())
    }

    /// How many sequential confirmations the action requires before any
    /// network call is allowed.
    pub fn required_confirmations(self) -> u8 {
        match self {
            Self::Enable | Self::Trigger => 1,
            Self::Disable | Self::Restart => 2,
        }
    }

    /// Fixed request body for the non-trigger actions. Trigger builds its
    /// body from an [`crate::emergency::EmergencyRequest`] instead.
    pub fn request_body(self) -> Value {
        match self {
            Self::Enable => json!({}),
            Self::Disable | Self::Restart => json!({ "confirm": true }),
            Self::Trigger => Value::Null,
        }
    }

    /// Delay before the page reload that follows a successful action, in
    /// milliseconds. Restart waits for the remote container to come back;
    /// trigger lets the user read the outcome first.
    pub fn reload_delay_ms(self) -> u32 {
        match self {
            Self::Enable | Self::Disable => 0,
            Self::Restart => 3000,
            Self::Trigger => 1000,
        }
    }

    /// Confirmation prompts shown for the action, in order. The first
    /// describes the impact; a second, where present, is the bare final
    /// confirmation.
    pub fn prompts(self, branch_name: &str) -> Vec<String> {
        match self {
            Self::Enable => vec![format!(
                "Enable {branch_name} branch?\n\nThis will allow emergency calls to be processed again."
            )],
            Self::Disable => vec![
                format!(
                    "WARNING: Are you sure you want to DISABLE the {branch_name} branch?\n\nThis will prevent all emergency calls from being processed for this location.\n\nAn SMS notification will be sent to the administrator."
                ),
                format!("FINAL CONFIRMATION: Disable {branch_name} branch?"),
            ],
            Self::Restart => vec![
                format!(
                    "RESTART CONTAINER: Are you sure you want to RESTART the {branch_name} branch container?\n\nThis will temporarily interrupt service for approximately 10-30 seconds while the container restarts.\n\nAny active emergency calls may be affected.\n\nAn SMS notification will be sent to the administrator."
                ),
                format!(
                    "FINAL CONFIRMATION: Restart {branch_name} container?\n\nThis action cannot be undone."
                ),
            ],
            // Trigger composes its prompt from the request fields; see
            // `EmergencyRequest::confirmation_prompt`.
            Self::Trigger => Vec::new(),
        }
    }
}

/// Where a gate is in its confirmation flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Waiting on further confirmations; `acknowledged` counts those given.
    Pending { acknowledged: u8 },
    Confirmed,
    Declined,
}

/// Tracks confirmations for one action attempt.
///
/// The gate is single-use: once confirmed or declined it stays there, and a
/// fresh attempt gets a fresh gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmationGate {
    required: u8,
    state: GateState,
}

impl ConfirmationGate {
    pub fn new(required: u8) -> Self {
        let state = if required == 0 {
            GateState::Confirmed
        } else {
            GateState::Pending { acknowledged: 0 }
        };
        Self { required, state }
    }

    pub fn for_action(kind: ActionKind) -> Self {
        Self::new(kind.required_confirmations())
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Record one affirmative answer. Confirmed once every required
    /// confirmation has been acknowledged; a no-op after a decline.
    pub fn acknowledge(&mut self) {
        if let GateState::Pending { acknowledged } = self.state {
            let acknowledged = acknowledged + 1;
            self.state = if acknowledged >= self.required {
                GateState::Confirmed
            } else {
                GateState::Pending { acknowledged }
            };
        }
    }

    /// Record a negative answer. Terminal.
    pub fn decline(&mut self) {
        if matches!(self.state, GateState::Pending { .. }) {
            self.state = GateState::Declined;
        }
    }

    /// The gate predicate: may the network call be issued?
    pub fn is_confirmed(&self) -> bool {
        self.state == GateState::Confirmed
    }

    pub fn is_declined(&self) -> bool {
        self.state == GateState::Declined
    }

    /// Confirmations still outstanding.
    pub fn remaining(&self) -> u8 {
        match self.state {
            GateState::Pending { acknowledged } => self.required - acknowledged,
            GateState::Confirmed | GateState::Declined => 0,
        }
    }
}

/// Drive a gate to completion with a yes/no dialog function, asking the
/// action's prompts in order. Returns whether the call may proceed.
///
/// Only meaningful for actions with static prompts; trigger builds its one
/// prompt from the request fields, so its callers run the gate themselves
/// with [`crate::emergency::EmergencyRequest::confirmation_prompt`].
pub fn confirm_action<F>(kind: ActionKind, branch_name: &str, mut ask: F) -> bool
where
    F: FnMut(&str) -> bool,
{
    let mut gate = ConfirmationGate::for_action(kind);
    for prompt in kind.prompts(branch_name) {
        if gate.is_confirmed() {
            break;
        }
        if ask(&prompt) {
            gate.acknowledge();
        } else {
            gate.decline();
            break;
        }
    }
    gate.is_confirmed()
}

/// Application-level result of a gateway POST.
///
/// The `success` flag distinguishes application failure from transport
/// failure; servers report the human-readable outcome in `message` on
/// success and `error` (falling back to `message`) on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ActionOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ActionOutcome {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Message shown after a successful action.
    pub fn success_text(&self) -> &str {
        self.message.as_deref().unwrap_or("Done")
    }

    /// Server-supplied failure string, verbatim.
    pub fn failure_text(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("Unknown error")
    }
}
