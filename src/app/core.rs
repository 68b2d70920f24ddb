//! Core BotPanelApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use chrono::Local;
use eframe::egui;
use std::thread;

use crate::backend::run_backend;
use crate::bubble::TextMetrics;
use crate::config::{load_settings, save_settings, Settings};
use crate::input_state::InputState;
use crate::launcher::Launcher;
use crate::logging::LogEntry;
use crate::protocol::{BackendAction, BotEvent, MessageContent, Sender as ChatSender};
use crate::reveal::RevealScheduler;
use crate::state::ChatState;
use crate::ui::theme;
use crate::validation;

pub struct BotPanelApp {
    // Core session state (bubbles, layout, panel, online flag)
    pub state: ChatState,

    // Reveal protocol for queued bot messages
    pub scheduler: RevealScheduler,

    // The strip the panel slides over; reactivated when the panel closes
    pub launcher: Launcher,

    // Input state (message composition, focus, history)
    pub input: InputState,

    // Measurement substrate shared by engine and renderer
    pub probe: TextMetrics,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<BotEvent>,

    // Persisted settings (webhook URL, theme, history)
    pub settings: Settings,
}

impl BotPanelApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings().unwrap_or_default();

        // Apply persisted theme in the creation context
        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }
        theme::apply_app_style(&cc.egui_ctx);

        Self::bootstrap(settings)
    }

    /// Create the app and spawn the backend thread for the configured bot.
    pub fn bootstrap(settings: Settings) -> Self {
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<BotEvent>();

        // Spawn the backend thread
        let webhook_url = settings.webhook_url.clone();
        thread::spawn(move || {
            run_backend(action_rx, event_tx, webhook_url);
        });

        Self::with_channels(action_tx, event_rx, settings)
    }

    /// Wire an app around explicit channels; the caller owns the backend
    /// side. Used by workflow tests.
    pub fn with_channels(
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<BotEvent>,
        settings: Settings,
    ) -> Self {
        let mut input = InputState::new();
        input.history = settings.history.clone();

        Self {
            state: ChatState::new(),
            scheduler: RevealScheduler::new(),
            launcher: Launcher::new(),
            input,
            probe: TextMetrics,
            action_tx,
            event_rx,
            settings,
        }
    }

    /// Get the current theme based on the theme string ("dark" or "light")
    pub(super) fn get_theme(&self) -> theme::PanelTheme {
        match self.settings.theme.as_str() {
            "light" => theme::PanelTheme::light(),
            _ => theme::PanelTheme::dark(),
        }
    }

    /// Validate, render and dispatch one outbound user message.
    ///
    /// The user bubble appears immediately (no reveal animation) and is
    /// placed on the next render cycle, once its measurement settles.
    pub fn send_user_message(&mut self, text: &str) -> bool {
        if let Err(reason) = validation::validate_outbound_text(text) {
            self.state.log_system(&format!("Not sent: {}", reason));
            return false;
        }

        let id = self.state.bubbles.spawn(ChatSender::User);
        if let Some(bubble) = self.state.bubbles.get_mut(id) {
            bubble.attach_content(&MessageContent::Text(text.to_string()));
        }
        self.state.pending_place.push(id);

        if let Some(logger) = &self.state.logger {
            logger.log(LogEntry {
                timestamp: Local::now().format("%H:%M:%S").to_string(),
                sender: "user".into(),
                message: text.to_string(),
            });
        }

        // Fire-and-forget; the reply arrives later as a batch event
        let _ = self.action_tx.send(BackendAction::SendText(text.to_string()));

        self.input.push_history(text.to_string());
        self.input.activate();
        true
    }
}

impl Drop for BotPanelApp {
    fn drop(&mut self) {
        // Persist settings on exit
        let settings = Settings {
            webhook_url: self.settings.webhook_url.clone(),
            theme: self.settings.theme.clone(),
            history: self.input.history.clone(),
        };
        if let Err(e) = save_settings(&settings) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
