//! Emergency trigger form for a selected branch.

use leptos::prelude::*;

use dispatchboard::actions::{ActionKind, ConfirmationGate};
use dispatchboard::branch::Branch;
use dispatchboard::emergency::EmergencyRequest;

/// Form that triggers an emergency on one branch.
///
/// Validation runs before the confirmation gate, and the gate before any
/// network call. While the request is in flight the submit control is
/// disabled and relabeled; application failure re-enables it and shows the
/// server's error verbatim.
#[component]
pub fn EmergencyForm(branch: Branch) -> impl IntoView {
    let tech_phone = RwSignal::new(String::new());
    let customer_name = RwSignal::new(String::new());
    let callback_number = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit = {
        let branch = branch.clone();
        move || {
            if submitting.get_untracked() {
                return;
            }
            let request = EmergencyRequest::from_form(
                &tech_phone.get_untracked(),
                &customer_name.get_untracked(),
                &callback_number.get_untracked(),
                &address.get_untracked(),
                &description.get_untracked(),
            );
            if let Err(error) = request.validate() {
                crate::util::dialog::notice(&format!("Error: {error}"));
                return;
            }

            let mut gate = ConfirmationGate::for_action(ActionKind::Trigger);
            if crate::util::dialog::ask(&request.confirmation_prompt(&branch.name)) {
                gate.acknowledge();
            } else {
                gate.decline();
            }
            if !gate.is_confirmed() {
                return;
            }

            submitting.set(true);
            #[cfg(feature = "hydrate")]
            {
                let key = branch.key.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::post_trigger(&key, &request).await {
                        Ok(outcome) if outcome.is_success() => {
                            submitting.set(false);
                            crate::util::dialog::notice(&format!(
                                "{}\n\nThe emergency has been triggered successfully.\n\nAn SMS notification has been sent to the administrator.",
                                outcome.success_text()
                            ));
                            for field in [tech_phone, customer_name, callback_number, address, description] {
                                field.set(String::new());
                            }
                            crate::util::reload::schedule(ActionKind::Trigger.reload_delay_ms());
                        }
                        Ok(outcome) => {
                            submitting.set(false);
                            crate::util::dialog::notice(&format!(
                                "Failed to trigger emergency:\n{}",
                                outcome.failure_text()
                            ));
                        }
                        Err(error) => {
                            submitting.set(false);
                            crate::util::dialog::notice(&format!(
                                "Error triggering emergency: {error}"
                            ));
                        }
                    }
                });
            }
        }
    };
    let submit = StoredValue::new(submit);

    let field = |label: &'static str, signal: RwSignal<String>, placeholder: &'static str| {
        view! {
            <label class="emergency-form__label">
                {label}
                <input
                    class="emergency-form__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.with_value(|s| s());
                        }
                    }
                />
            </label>
        }
    };

    view! {
        <form class="emergency-form" on:submit=move |ev| {
            ev.prevent_default();
            submit.with_value(|s| s());
        }>
            <h2>{format!("Trigger Emergency: {}", branch.name)}</h2>
            {field("Technician Phone", tech_phone, "+12084039927")}
            {field("Customer Name", customer_name, "")}
            {field("Callback Number", callback_number, "+15551234567")}
            {field("Incident Address", address, "")}
            <label class="emergency-form__label">
                "Description"
                <textarea
                    class="emergency-form__input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--danger" type="submit" disabled=move || submitting.get()>
                {move || {
                    if submitting.get() {
                        "Triggering emergency..."
                    } else {
                        "Trigger Emergency"
                    }
                }}
            </button>
        </form>
    }
}
