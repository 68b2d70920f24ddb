//! Bot network backend: webhook POSTs, health polling, image fetches.
//!
//! Runs on its own thread with a Tokio runtime and talks to the UI only
//! through channels. Every failure here is absorbed: send failures surface
//! as a system-log line, image-fetch failures surface as nothing at all.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::protocol::{batch_from_wire, BackendAction, BotEvent, WireMessage};

/// How often the bot's health endpoint is polled.
const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Pause between action-queue checks.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Per-request timeout for webhook and image traffic.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Sender tag attached to outbound webhook payloads.
const OUTBOUND_SENDER: &str = "user";

/// Outbound webhook payload shape.
#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    sender: &'a str,
    message: &'a str,
}

/// Run the backend event loop on a tokio runtime
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<BotEvent>,
    webhook_url: String,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(BotEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => client,
            Err(e) => {
                let _ = event_tx.send(BotEvent::Error(format!(
                    "Failed to create HTTP client: {}",
                    e
                )));
                return;
            }
        };

        let health_url = health_url_for(&webhook_url);
        let mut online = false;
        let mut next_health_poll = tokio::time::Instant::now();

        loop {
            // Check for actions from the UI (non-blocking)
            while let Ok(action) = action_rx.try_recv() {
                match action {
                    BackendAction::SendText(text) => {
                        match post_message(&client, &webhook_url, &text).await {
                            Ok(batch) => {
                                let _ = event_tx.send(BotEvent::BatchReceived(batch));
                            }
                            Err(e) => {
                                let _ = event_tx.send(BotEvent::Error(format!(
                                    "Send failed: {}",
                                    e
                                )));
                            }
                        }
                    }

                    BackendAction::FetchImage { bubble, url } => {
                        // best-effort: a failed fetch leaves the slot blank
                        if let Ok(bytes) = fetch_image(&client, &url).await {
                            let _ = event_tx.send(BotEvent::ImageFetched { bubble, bytes });
                        }
                    }
                }
            }

            // Poll bot health on its own interval; report only changes
            if tokio::time::Instant::now() >= next_health_poll {
                let now_online = client
                    .get(health_url.as_str())
                    .send()
                    .await
                    .map(|r| r.status().is_success())
                    .unwrap_or(false);
                if now_online != online {
                    online = now_online;
                    let _ = event_tx.send(BotEvent::Online(online));
                }
                next_health_poll = tokio::time::Instant::now() + HEALTH_POLL_INTERVAL;
            }

            tokio::time::sleep(IDLE_POLL_INTERVAL).await;
        }
    });
}

/// POST the user's text to the webhook and explode the reply into a batch.
async fn post_message(
    client: &reqwest::Client,
    webhook_url: &str,
    text: &str,
) -> Result<crate::protocol::MessageBatch, String> {
    let payload = OutboundMessage {
        sender: OUTBOUND_SENDER,
        message: text,
    };

    let response = client
        .post(webhook_url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| format!("request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("webhook returned {}", response.status()));
    }

    let records: Vec<WireMessage> = response
        .json()
        .await
        .map_err(|e| format!("bad response body: {}", e))?;

    Ok(batch_from_wire(&records))
}

/// GET image bytes for a bubble.
async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("image fetch returned {}", response.status()));
    }
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}

/// Health endpoint for a webhook URL: the server root.
pub(crate) fn health_url_for(webhook_url: &str) -> String {
    match webhook_url.find("://").map(|i| i + 3) {
        Some(scheme_end) => match webhook_url[scheme_end..].find('/') {
            Some(path_start) => webhook_url[..scheme_end + path_start + 1].to_string(),
            None => format!("{}/", webhook_url),
        },
        None => webhook_url.to_string(),
    }
}
