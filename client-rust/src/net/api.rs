//! REST helpers for the dispatch service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `Err(String)` is the transport tier: network failure or a non-JSON body.
//! Application failure stays in the `Ok` value (`success: false` and the
//! server's own error string), so callers can render the two tiers the way
//! each surface requires. None of these calls retries.

#![allow(clippy::unused_async)]

use dispatchboard::actions::{ActionKind, ActionOutcome};
use dispatchboard::branch::{BranchStatus, status_path};
use dispatchboard::config::PanelConfig;
use dispatchboard::console::{FirehoseReport, ServiceStatus, WebhookReply};
use dispatchboard::emergency::EmergencyRequest;
use dispatchboard::recordings::{RecordingsPage, page_path};

/// Poll one branch's status.
pub async fn fetch_branch_status(key: &str) -> Result<BranchStatus, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&status_path(key))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<BranchStatus>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err("not available on server".to_owned())
    }
}

/// Submit a gated branch action (enable, disable, restart). The caller must
/// have run the confirmation gate first.
pub async fn post_branch_action(kind: ActionKind, key: &str) -> Result<ActionOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&kind.path(key))
            .json(&kind.request_body())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<ActionOutcome>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, key);
        Err("not available on server".to_owned())
    }
}

/// Submit an emergency trigger for a branch.
pub async fn post_trigger(key: &str, request: &EmergencyRequest) -> Result<ActionOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&ActionKind::Trigger.path(key))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<ActionOutcome>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, request);
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of call recordings for a branch.
pub async fn fetch_recordings(key: &str, page: usize) -> Result<RecordingsPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&page_path(key, page))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<RecordingsPage>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, page);
        Err("not available on server".to_owned())
    }
}

/// Fetch the configured service's status summary.
pub async fn fetch_service_status(config: &PanelConfig) -> Result<ServiceStatus, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint("/api/status"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}: {}", resp.status(), resp.status_text()));
        }
        resp.json::<ServiceStatus>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err("not available on server".to_owned())
    }
}

/// Trigger an emergency through the configured service's webhook. Here the
/// HTTP status line is the success signal; a non-2xx reply surfaces the
/// body's `message` (or the status text) as the failure string.
pub async fn post_webhook_trigger(
    config: &PanelConfig,
    request: &EmergencyRequest,
) -> Result<WebhookReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint("/webhook"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let ok = resp.ok();
        let status_text = resp.status_text();
        let reply = resp.json::<WebhookReply>().await.map_err(|e| e.to_string())?;
        if ok {
            Ok(reply)
        } else {
            Err(reply.message.unwrap_or(status_text))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err("not available on server".to_owned())
    }
}

/// Ask the service to replay its event log to `webhook_url`.
pub async fn fetch_firehose(
    config: &PanelConfig,
    webhook_url: &str,
) -> Result<FirehoseReport, String> {
    #[cfg(feature = "hydrate")]
    {
        let encoded: String = js_sys::encode_uri_component(webhook_url).into();
        let url = format!("{}?webhook_url={encoded}", config.endpoint("/debug_firehose"));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status_text = resp.status_text();
        if resp.ok() {
            resp.json::<FirehoseReport>()
                .await
                .map_err(|e| e.to_string())
        } else {
            let error = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(ToOwned::to_owned))
                .unwrap_or(status_text);
            Err(error)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, webhook_url);
        Err("not available on server".to_owned())
    }
}

/// Fetch the service's server-rendered status page HTML, the source the
/// timeline is scraped from.
pub async fn fetch_status_page(config: &PanelConfig) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint("/status"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}: {}", resp.status(), resp.status_text()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err("not available on server".to_owned())
    }
}
