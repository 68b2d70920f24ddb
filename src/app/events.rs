//! Event processing from the backend

use chrono::Local;

use super::BotPanelApp;
use crate::bubble::BubbleContent;
use crate::logging::LogEntry;
use crate::protocol::{BotEvent, MessageContent};

impl BotPanelApp {
    /// Drain all pending events from the backend.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                BotEvent::Online(online) => {
                    self.state.bot_online = online;
                    self.state.log_system(if online {
                        "Bot is online."
                    } else {
                        "Bot went offline."
                    });
                }

                BotEvent::BatchReceived(batch) => {
                    self.state
                        .log_system(&format!("Received {} message(s).", batch.messages.len()));

                    // Persist text replies to the transcript
                    if let Some(logger) = &self.state.logger {
                        let ts = Local::now().format("%H:%M:%S").to_string();
                        for message in &batch.messages {
                            if let MessageContent::Text(text) = &message.content {
                                logger.log(LogEntry {
                                    timestamp: ts.clone(),
                                    sender: "bot".into(),
                                    message: text.clone(),
                                });
                            }
                        }
                    }

                    self.scheduler.enqueue_batch(batch);
                }

                BotEvent::ImageFetched { bubble, bytes } => {
                    // The bubble may be gone after a clear; skipping is fine
                    let mut updated = false;
                    if let Some(bubble) = self.state.bubbles.get_mut(bubble) {
                        if let BubbleContent::Image { bytes: slot, .. } = &mut bubble.content {
                            *slot = Some(bytes);
                            updated = true;
                        }
                    }
                    if updated {
                        // content changed under a placed bubble; refresh every slot
                        self.state.layout.recompute_all(&mut self.state.bubbles);
                    }
                }

                BotEvent::Error(message) => {
                    self.state.log_system(&format!("Error: {}", message));
                }
            }
        }
    }
}
