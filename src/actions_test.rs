use super::*;

// =============================================================
// ActionKind endpoint contract
// =============================================================

#[test]
fn action_paths_are_keyed_by_branch() {
    assert_eq!(ActionKind::Enable.path("sf"), "/api/branch/sf/enable");
    assert_eq!(ActionKind::Disable.path("sf"), "/api/branch/sf/disable");
    assert_eq!(ActionKind::Restart.path("sf"), "/api/branch/sf/restart");
    assert_eq!(ActionKind::Trigger.path("sf"), "/api/branch/sf/trigger");
}

#[test]
fn enable_posts_empty_body() {
    assert_eq!(ActionKind::Enable.request_body(), serde_json::json!({}));
}

#[test]
fn disable_and_restart_post_confirm_true() {
    let expected = serde_json::json!({ "confirm": true });
    assert_eq!(ActionKind::Disable.request_body(), expected);
    assert_eq!(ActionKind::Restart.request_body(), expected);
}

#[test]
fn restart_reloads_after_three_seconds() {
    assert_eq!(ActionKind::Restart.reload_delay_ms(), 3000);
}

#[test]
fn trigger_reloads_after_one_second() {
    assert_eq!(ActionKind::Trigger.reload_delay_ms(), 1000);
}

#[test]
fn enable_and_disable_reload_immediately() {
    assert_eq!(ActionKind::Enable.reload_delay_ms(), 0);
    assert_eq!(ActionKind::Disable.reload_delay_ms(), 0);
}

// =============================================================
// Confirmation counts
// =============================================================

#[test]
fn destructive_actions_require_two_confirmations() {
    assert_eq!(ActionKind::Disable.required_confirmations(), 2);
    assert_eq!(ActionKind::Restart.required_confirmations(), 2);
}

#[test]
fn enable_and_trigger_require_one_confirmation() {
    assert_eq!(ActionKind::Enable.required_confirmations(), 1);
    assert_eq!(ActionKind::Trigger.required_confirmations(), 1);
}

#[test]
fn prompt_count_matches_required_confirmations() {
    for kind in [ActionKind::Enable, ActionKind::Disable, ActionKind::Restart] {
        assert_eq!(
            kind.prompts("Tucson").len(),
            usize::from(kind.required_confirmations()),
            "{:?}",
            kind
        );
    }
}

#[test]
fn disable_prompts_name_the_branch() {
    let prompts = ActionKind::Disable.prompts("Tucson");
    assert!(prompts[0].contains("DISABLE the Tucson branch"));
    assert!(prompts[1].starts_with("FINAL CONFIRMATION"));
}

// =============================================================
// ConfirmationGate
// =============================================================

#[test]
fn gate_starts_pending() {
    let gate = ConfirmationGate::for_action(ActionKind::Disable);
    assert_eq!(gate.state(), GateState::Pending { acknowledged: 0 });
    assert!(!gate.is_confirmed());
    assert_eq!(gate.remaining(), 2);
}

#[test]
fn gate_confirms_after_required_acknowledgements() {
    let mut gate = ConfirmationGate::for_action(ActionKind::Restart);
    gate.acknowledge();
    assert!(!gate.is_confirmed());
    assert_eq!(gate.remaining(), 1);
    gate.acknowledge();
    assert!(gate.is_confirmed());
}

#[test]
fn single_confirmation_gate_confirms_at_once() {
    let mut gate = ConfirmationGate::for_action(ActionKind::Enable);
    gate.acknowledge();
    assert!(gate.is_confirmed());
}

#[test]
fn decline_is_terminal() {
    let mut gate = ConfirmationGate::for_action(ActionKind::Disable);
    gate.acknowledge();
    gate.decline();
    assert!(gate.is_declined());
    gate.acknowledge();
    assert!(!gate.is_confirmed());
    assert_eq!(gate.remaining(), 0);
}

#[test]
fn acknowledge_past_confirmed_is_a_no_op() {
    let mut gate = ConfirmationGate::new(1);
    gate.acknowledge();
    gate.acknowledge();
    assert!(gate.is_confirmed());
}

#[test]
fn zero_required_confirms_immediately() {
    let gate = ConfirmationGate::new(0);
    assert!(gate.is_confirmed());
}

// =============================================================
// confirm_action driver
// =============================================================

#[test]
fn confirm_action_asks_both_disable_prompts() {
    let mut asked = Vec::new();
    let proceed = confirm_action(ActionKind::Disable, "Tucson", |prompt| {
        asked.push(prompt.to_owned());
        true
    });
    assert!(proceed);
    assert_eq!(asked.len(), 2);
}

#[test]
fn confirm_action_stops_after_first_decline() {
    let mut asked = 0;
    let proceed = confirm_action(ActionKind::Restart, "Tucson", |_| {
        asked += 1;
        false
    });
    assert!(!proceed);
    assert_eq!(asked, 1);
}

#[test]
fn confirm_action_declined_on_final_prompt() {
    let mut answers = [true, false].into_iter();
    let proceed = confirm_action(ActionKind::Disable, "Tucson", |_| answers.next().unwrap());
    assert!(!proceed);
}

#[test]
fn confirm_action_enable_asks_once() {
    let mut asked = 0;
    let proceed = confirm_action(ActionKind::Enable, "Tucson", |_| {
        asked += 1;
        true
    });
    assert!(proceed);
    assert_eq!(asked, 1);
}

// =============================================================
// ActionOutcome
// =============================================================

#[test]
fn outcome_success_reads_message() {
    let outcome = ActionOutcome::from_value(&serde_json::json!({
        "success": true,
        "message": "Restarted"
    }));
    assert!(outcome.is_success());
    assert_eq!(outcome.success_text(), "Restarted");
}

#[test]
fn outcome_failure_prefers_error_over_message() {
    let outcome = ActionOutcome::from_value(&serde_json::json!({
        "success": false,
        "error": "Permission denied",
        "message": "ignored"
    }));
    assert!(!outcome.is_success());
    assert_eq!(outcome.failure_text(), "Permission denied");
}

#[test]
fn outcome_failure_falls_back_to_message() {
    let outcome = ActionOutcome::from_value(&serde_json::json!({
        "success": false,
        "message": "Confirmation required"
    }));
    assert_eq!(outcome.failure_text(), "Confirmation required");
}

#[test]
fn outcome_missing_success_field_is_failure() {
    let outcome = ActionOutcome::from_value(&serde_json::json!({ "message": "hm" }));
    assert!(!outcome.is_success());
}

#[test]
fn outcome_from_non_object_is_failure() {
    let outcome = ActionOutcome::from_value(&serde_json::json!("nope"));
    assert!(!outcome.is_success());
    assert_eq!(outcome.failure_text(), "Unknown error");
}
