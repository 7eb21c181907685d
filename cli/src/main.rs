use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use dispatchboard::actions::{ActionKind, ActionOutcome, confirm_action};
use dispatchboard::branch::{BranchRoster, BranchStatus, POLL_INTERVAL_MS, status_path};
use dispatchboard::config::PanelConfig;
use dispatchboard::console::{
    FirehoseReport, ServiceStatus, WebhookReply, WebhookUrlError, validate_webhook_url,
};
use dispatchboard::emergency::{EmergencyRequest, EmergencyRequestError};
use dispatchboard::recordings::{EMPTY_PLACEHOLDER, PageControls, RecordingsPage, page_path};
use dispatchboard::timeline::{EventKind, extract_events};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{0}")]
    Emergency(#[from] EmergencyRequestError),
    #[error("{0}")]
    WebhookUrl(#[from] WebhookUrlError),
    #[error("server returned error for {action}: {message}")]
    ServerError { action: String, message: String },
}

#[derive(Parser, Debug)]
#[command(name = "dispatch-cli", about = "Branch control panel CLI")]
struct Cli {
    /// Admin dashboard API, the origin the branch endpoints live under.
    #[arg(long, env = "DISPATCH_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    /// Dispatch service base URL for the console commands.
    #[arg(long, env = "DISPATCH_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    /// Answer yes to every confirmation prompt.
    #[arg(long, default_value_t = false)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug)]
struct CliContext {
    base_url: String,
    config: PanelConfig,
    assume_yes: bool,
    roster: BranchRoster,
}

impl CliContext {
    fn admin_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Display name for a key; unknown keys fall through verbatim and the
    /// server decides whether they exist.
    fn branch_name(&self, key: &str) -> String {
        self.roster
            .get(key)
            .map_or_else(|| key.to_owned(), |b| b.name.clone())
    }

    fn keys_or_roster(&self, keys: &[String]) -> Vec<String> {
        if keys.is_empty() {
            self.roster.iter().map(|b| b.key.clone()).collect()
        } else {
            keys.to_vec()
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One status pass over the given branches (all, when none given).
    Status { keys: Vec<String> },
    /// Status passes every 30 seconds until interrupted.
    Watch { keys: Vec<String> },
    Enable { key: String },
    Disable { key: String },
    Restart { key: String },
    /// Trigger an emergency on a branch.
    Trigger {
        key: String,
        #[command(flatten)]
        emergency: EmergencyArgs,
    },
    /// List call recordings for a branch.
    Recordings {
        key: String,
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Talk to the dispatch service directly at --api-url.
    Console(ConsoleCommand),
}

#[derive(Args, Debug)]
struct EmergencyArgs {
    #[arg(long)]
    tech_phone: String,
    #[arg(long)]
    customer: String,
    #[arg(long)]
    callback: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    description: String,
}

impl EmergencyArgs {
    fn to_request(&self) -> EmergencyRequest {
        EmergencyRequest::from_form(
            &self.tech_phone,
            &self.customer,
            &self.callback,
            &self.address,
            &self.description,
        )
    }
}

#[derive(Args, Debug)]
struct ConsoleCommand {
    #[command(subcommand)]
    command: ConsoleSubcommand,
}

#[derive(Subcommand, Debug)]
enum ConsoleSubcommand {
    /// Service status summary.
    Status,
    /// Trigger an emergency through the service webhook.
    Trigger {
        #[command(flatten)]
        emergency: EmergencyArgs,
    },
    /// Replay the service event log to a webhook.
    Firehose { webhook_url: String },
    /// Scrape the timeline from the service status page.
    Timeline,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let mut config = PanelConfig::default();
    // An all-whitespace override falls back to the default base URL.
    let _ = config.set_api_url(&cli.api_url);
    let ctx = CliContext {
        base_url: cli.base_url,
        config,
        assume_yes: cli.yes,
        roster: BranchRoster::deployed(),
    };

    match cli.command {
        Command::Status { keys } => run_status(&ctx, &keys).await,
        Command::Watch { keys } => run_watch(&ctx, &keys).await,
        Command::Enable { key } => run_action(&ctx, ActionKind::Enable, &key).await,
        Command::Disable { key } => run_action(&ctx, ActionKind::Disable, &key).await,
        Command::Restart { key } => run_action(&ctx, ActionKind::Restart, &key).await,
        Command::Trigger { key, emergency } => run_trigger(&ctx, &key, &emergency).await,
        Command::Recordings { key, page } => run_recordings(&ctx, &key, page).await,
        Command::Console(console) => match console.command {
            ConsoleSubcommand::Status => run_console_status(&ctx).await,
            ConsoleSubcommand::Trigger { emergency } => run_console_trigger(&ctx, &emergency).await,
            ConsoleSubcommand::Firehose { webhook_url } => {
                run_console_firehose(&ctx, &webhook_url).await
            }
            ConsoleSubcommand::Timeline => run_console_timeline(&ctx).await,
        },
    }
}

/// One full status pass. Failures are isolated per branch: a branch that
/// cannot be reached is reported and the pass moves on.
async fn run_status(ctx: &CliContext, keys: &[String]) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    for key in ctx.keys_or_roster(keys) {
        let url = ctx.admin_url(&status_path(&key));
        match fetch_status(&client, &url).await {
            Ok(status) => {
                let enabled = if status.enabled { "enabled" } else { "DISABLED" };
                println!(
                    "{:<12} {:<10} {:<9} {}",
                    ctx.branch_name(&key),
                    status.status,
                    enabled,
                    status.message
                );
            }
            Err(error) => {
                eprintln!("{}: status unavailable: {error}", ctx.branch_name(&key));
            }
        }
    }
    Ok(())
}

async fn fetch_status(client: &reqwest::Client, url: &str) -> Result<BranchStatus, CliError> {
    let response = client.get(url).send().await?;
    let status = response.json::<BranchStatus>().await?;
    Ok(status)
}

async fn run_watch(ctx: &CliContext, keys: &[String]) -> Result<(), CliError> {
    loop {
        run_status(ctx, keys).await?;
        println!();
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(POLL_INTERVAL_MS))).await;
    }
}

/// Gate, then submit, one branch action.
async fn run_action(ctx: &CliContext, kind: ActionKind, key: &str) -> Result<(), CliError> {
    let name = ctx.branch_name(key);
    if !confirm_action(kind, &name, |prompt| ask(prompt, ctx.assume_yes)) {
        println!("Aborted.");
        return Ok(());
    }
    if kind == ActionKind::Restart {
        println!("Restarting container... this may take 10-30 seconds.");
    }

    let client = reqwest::Client::new();
    let response = client
        .post(ctx.admin_url(&kind.path(key)))
        .json(&kind.request_body())
        .send()
        .await?;
    let value = response.json::<Value>().await?;
    let outcome = ActionOutcome::from_value(&value);
    if outcome.is_success() {
        println!("{}", outcome.success_text());
        Ok(())
    } else {
        Err(CliError::ServerError {
            action: kind.verb().to_owned(),
            message: outcome.failure_text().to_owned(),
        })
    }
}

async fn run_trigger(ctx: &CliContext, key: &str, args: &EmergencyArgs) -> Result<(), CliError> {
    let request = args.to_request();
    request.validate()?;

    let name = ctx.branch_name(key);
    if !ask(&request.confirmation_prompt(&name), ctx.assume_yes) {
        println!("Aborted.");
        return Ok(());
    }

    let client = reqwest::Client::new();
    let response = client
        .post(ctx.admin_url(&ActionKind::Trigger.path(key)))
        .json(&request)
        .send()
        .await?;
    let value = response.json::<Value>().await?;
    let outcome = ActionOutcome::from_value(&value);
    if outcome.is_success() {
        println!("{}", outcome.success_text());
        Ok(())
    } else {
        Err(CliError::ServerError {
            action: "trigger".to_owned(),
            message: outcome.failure_text().to_owned(),
        })
    }
}

async fn run_recordings(ctx: &CliContext, key: &str, page: usize) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client
        .get(ctx.admin_url(&page_path(key, page)))
        .send()
        .await?;
    let listing = response.json::<RecordingsPage>().await?;
    if !listing.success {
        return Err(CliError::ServerError {
            action: "recordings".to_owned(),
            message: listing.failure_text().to_owned(),
        });
    }

    if listing.recordings.is_empty() {
        println!("{EMPTY_PLACEHOLDER}");
    }
    for recording in &listing.recordings {
        println!(
            "{} to {}  {}  {}  {}  {}",
            recording.from,
            recording.to,
            recording.date_label(),
            recording.duration_label(),
            recording.status,
            recording.media_url
        );
    }

    let controls = PageControls::for_page(page, listing.count);
    let mut hints = vec![format!("Page {}", controls.label)];
    if let Some(previous) = controls.previous {
        hints.push(format!("previous: --page {previous}"));
    }
    if let Some(next) = controls.next {
        hints.push(format!("next: --page {next}"));
    }
    println!("{}", hints.join("  "));
    Ok(())
}

async fn run_console_status(ctx: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client
        .get(ctx.config.endpoint("/api/status"))
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(CliError::ServerError {
            action: "status".to_owned(),
            message: format!("HTTP {}", response.status().as_u16()),
        });
    }
    let status = response.json::<ServiceStatus>().await?;
    println!("{}: {}", status.status_label(), status.message_label());
    Ok(())
}

async fn run_console_trigger(ctx: &CliContext, args: &EmergencyArgs) -> Result<(), CliError> {
    let request = args.to_request();
    request.validate()?;

    let client = reqwest::Client::new();
    let response = client
        .post(ctx.config.endpoint("/webhook"))
        .json(&request)
        .send()
        .await?;
    let ok = response.status().is_success();
    let http_status = response.status().as_u16();
    let reply = response.json::<WebhookReply>().await.unwrap_or_default();
    if ok {
        println!(
            "Emergency triggered. Status: {}",
            reply.status.as_deref().unwrap_or("success")
        );
        Ok(())
    } else {
        Err(CliError::ServerError {
            action: "webhook".to_owned(),
            message: reply
                .message
                .unwrap_or_else(|| format!("HTTP {http_status}")),
        })
    }
}

async fn run_console_firehose(ctx: &CliContext, webhook_url: &str) -> Result<(), CliError> {
    let target = validate_webhook_url(webhook_url)?;

    let client = reqwest::Client::new();
    let response = client
        .get(ctx.config.endpoint("/debug_firehose"))
        .query(&[("webhook_url", target)])
        .send()
        .await?;
    if !response.status().is_success() {
        let http_status = response.status().as_u16();
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(ToOwned::to_owned))
            .unwrap_or_else(|| format!("HTTP {http_status}"));
        return Err(CliError::ServerError {
            action: "debug_firehose".to_owned(),
            message,
        });
    }
    let report = response.json::<FirehoseReport>().await?;
    println!(
        "Sent {} timeline events to {}",
        report.timeline_count, report.target
    );
    Ok(())
}

async fn run_console_timeline(ctx: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(ctx.config.endpoint("/status")).send().await?;
    if !response.status().is_success() {
        return Err(CliError::ServerError {
            action: "timeline".to_owned(),
            message: format!("HTTP {}", response.status().as_u16()),
        });
    }
    let html = response.text().await?;
    let events = extract_events(&html);
    if events.is_empty() {
        println!("{}", dispatchboard::timeline::EMPTY_PLACEHOLDER);
        return Ok(());
    }
    for event in events {
        let marker = match event.kind {
            EventKind::Success => "ok   ",
            EventKind::Error => "ERROR",
        };
        println!("{marker}  {}  {}", event.time, event.details);
    }
    Ok(())
}

/// Put one confirmation prompt to the operator. `--yes` acknowledges it
/// without asking; otherwise anything but y/yes declines.
fn ask(prompt: &str, assume_yes: bool) -> bool {
    println!("{prompt}");
    if assume_yes {
        println!("[y/N]: y (--yes)");
        return true;
    }
    print!("[y/N]: ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
