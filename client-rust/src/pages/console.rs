//! Standalone console page.
//!
//! Works against a configurable API base URL persisted in `localStorage`,
//! independent of the dashboard's own origin: service status with
//! auto-refresh, emergency trigger via the service webhook, debug firehose
//! replay, and the scraped timeline.

use leptos::prelude::*;

use dispatchboard::console::{ResponseTone, validate_webhook_url};
use dispatchboard::emergency::EmergencyRequest;

use crate::components::timeline_panel::TimelinePanel;
use crate::net::poller::{request_status_refresh, spawn_console_poller};
use crate::state::console::ConsoleState;
use crate::util::clock::now_label;

/// Console page. Loads the persisted configuration, then starts the status
/// auto-refresh loop; the loop stops when the page unmounts.
#[component]
pub fn ConsolePage() -> impl IntoView {
    let console = expect_context::<RwSignal<ConsoleState>>();

    let stored = crate::util::storage::load_config();
    let api_url_input = RwSignal::new(stored.api_url.clone());
    console.update(|s| s.config = stored);

    let poller = spawn_console_poller(console);
    on_cleanup(move || poller.stop());

    let webhook_url_input = RwSignal::new(String::new());
    let tech_phone = RwSignal::new(String::new());
    let customer_name = RwSignal::new(String::new());
    let callback_number = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let triggering = RwSignal::new(false);

    let save_config = move || {
        let raw = api_url_input.get_untracked();
        let mut result = Ok(());
        console.update(|s| result = s.config.set_api_url(&raw));
        match result {
            Ok(()) => {
                let config = console.get_untracked().config.clone();
                crate::util::storage::save_config(&config);
                api_url_input.set(config.api_url);
                console.update(|s| {
                    s.respond(
                        ResponseTone::Success,
                        &now_label(),
                        "Configuration saved successfully!",
                    );
                });
            }
            Err(error) => console.update(|s| {
                s.respond(ResponseTone::Error, &now_label(), format!("Error: {error}"));
            }),
        }
    };
    let save_config = StoredValue::new(save_config);

    let on_refresh = move |_| request_status_refresh(console);

    let trigger = move || {
        if triggering.get_untracked() {
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
            console.update(|s| {
                s.respond(ResponseTone::Error, &now_label(), format!("Error: {error}"));
            });
            return;
        }
        console.update(|s| s.respond(ResponseTone::Info, &now_label(), "Triggering emergency..."));
        triggering.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let config = console.get_untracked().config.clone();
                match crate::net::api::post_webhook_trigger(&config, &request).await {
                    Ok(reply) => {
                        triggering.set(false);
                        console.update(|s| {
                            s.respond(
                                ResponseTone::Success,
                                &now_label(),
                                format!(
                                    "Emergency triggered successfully!\nStatus: {}",
                                    reply.status.as_deref().unwrap_or("success")
                                ),
                            );
                        });
                        for field in [tech_phone, customer_name, callback_number, address, description] {
                            field.set(String::new());
                        }
                        // Refresh status once the service has had a second
                        // to record the trigger.
                        leptos::task::spawn_local(async move {
                            gloo_timers::future::sleep(std::time::Duration::from_millis(1000))
                                .await;
                            crate::net::poller::refresh_service_status(console).await;
                        });
                    }
                    Err(error) => {
                        triggering.set(false);
                        console.update(|s| {
                            s.respond(
                                ResponseTone::Error,
                                &now_label(),
                                format!("Failed to trigger emergency:\n{error}"),
                            );
                        });
                    }
                }
            });
        }
    };
    let trigger = StoredValue::new(trigger);

    let send_firehose = move || {
        let raw = webhook_url_input.get_untracked();
        let target = match validate_webhook_url(&raw) {
            Ok(url) => url.to_owned(),
            Err(error) => {
                console.update(|s| {
                    s.respond(ResponseTone::Error, &now_label(), format!("Error: {error}"));
                });
                return;
            }
        };
        console.update(|s| {
            s.respond(ResponseTone::Info, &now_label(), "Sending logs to webhook...");
        });
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let config = console.get_untracked().config.clone();
                match crate::net::api::fetch_firehose(&config, &target).await {
                    Ok(report) => console.update(|s| {
                        s.respond(
                            ResponseTone::Success,
                            &now_label(),
                            format!(
                                "Logs sent successfully!\nTimeline events: {}\nTarget: {}",
                                report.timeline_count, report.target
                            ),
                        );
                    }),
                    Err(error) => console.update(|s| {
                        s.respond(
                            ResponseTone::Error,
                            &now_label(),
                            format!("Failed to send logs: {error}"),
                        );
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    };
    let send_firehose = StoredValue::new(send_firehose);

    let on_load_timeline = move |_| {
        console.update(|s| s.respond(ResponseTone::Info, &now_label(), "Loading timeline..."));
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let config = console.get_untracked().config.clone();
                match crate::net::api::fetch_status_page(&config).await {
                    Ok(html) => {
                        let events = dispatchboard::timeline::extract_events(&html);
                        let count = events.len();
                        console.update(|s| {
                            s.apply_timeline(events);
                            if count == 0 {
                                s.respond(
                                    ResponseTone::Info,
                                    &now_label(),
                                    "No timeline events available",
                                );
                            } else {
                                s.respond(
                                    ResponseTone::Success,
                                    &now_label(),
                                    format!("Timeline loaded: {count} events"),
                                );
                            }
                        });
                    }
                    Err(error) => console.update(|s| {
                        s.respond(
                            ResponseTone::Error,
                            &now_label(),
                            format!("Error loading timeline: {error}"),
                        );
                    }),
                }
            });
        }
    };

    view! {
        <div class="console-page">
            <header class="console-page__header">
                <h1>"Dispatch Console"</h1>
                <a href="/" class="btn btn--secondary">
                    "Dashboard"
                </a>
            </header>

            <section class="console-card">
                <h2>"Configuration"</h2>
                <label class="console-card__label">
                    "API URL"
                    <input
                        type="text"
                        prop:value=move || api_url_input.get()
                        on:input=move |ev| api_url_input.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                save_config.with_value(|f| f());
                            }
                        }
                    />
                </label>
                <button class="btn btn--primary" on:click=move |_| save_config.with_value(|f| f())>
                    "Save"
                </button>
            </section>

            <section class="console-card">
                <h2>"Service Status"</h2>
                <p>
                    <span class=move || console.get().status_text().1>
                        {move || console.get().status_text().0}
                    </span>
                </p>
                <p class="console-card__message">{move || console.get().status_message()}</p>
                <p class="console-card__updated">
                    {move || {
                        console
                            .get()
                            .last_updated
                            .as_ref()
                            .map(|stamp| format!("Last updated: {stamp}"))
                            .unwrap_or_default()
                    }}
                </p>
                <button class="btn" on:click=on_refresh>
                    "Refresh Status"
                </button>
            </section>

            <section class="console-card">
                <h2>"Trigger Emergency"</h2>
                {console_field("Technician Phone", tech_phone, trigger)}
                {console_field("Customer Name", customer_name, trigger)}
                {console_field("Callback Number", callback_number, trigger)}
                {console_field("Incident Address", address, trigger)}
                <label class="console-card__label">
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    class="btn btn--danger"
                    disabled=move || triggering.get()
                    on:click=move |_| trigger.with_value(|f| f())
                >
                    {move || if triggering.get() { "Triggering..." } else { "Trigger" }}
                </button>
            </section>

            <section class="console-card">
                <h2>"Debug Firehose"</h2>
                <label class="console-card__label">
                    "Webhook URL"
                    <input
                        type="text"
                        placeholder="https://hooks.example.com/incoming"
                        prop:value=move || webhook_url_input.get()
                        on:input=move |ev| webhook_url_input.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                send_firehose.with_value(|f| f());
                            }
                        }
                    />
                </label>
                <button class="btn" on:click=move |_| send_firehose.with_value(|f| f())>
                    "Send Logs"
                </button>
            </section>

            <section class="console-card">
                <h2>"Timeline"</h2>
                <button class="btn" on:click=on_load_timeline>
                    "Load Timeline"
                </button>
                <TimelinePanel/>
            </section>

            <section class="console-card">
                <h2>"Response"</h2>
                <div class="response-area">
                    {move || {
                        console
                            .get()
                            .response
                            .map(|line| {
                                view! { <div class=line.tone.css_class()>{line.text}</div> }
                            })
                    }}
                </div>
            </section>
        </div>
    }
}

/// Single-line console form field; Enter submits.
fn console_field<F>(
    label: &'static str,
    signal: RwSignal<String>,
    submit: StoredValue<F>,
) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    view! {
        <label class="console-card__label">
            {label}
            <input
                type="text"
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit.with_value(|f| f());
                    }
                }
            />
        </label>
    }
}
