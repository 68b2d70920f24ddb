//! Per-frame engine step and the eframe update loop

use eframe::egui;
use std::time::Instant;

use super::BotPanelApp;
use crate::panel::{PanelState, PanelTransition, SLIDE_INTERVAL};

impl BotPanelApp {
    /// One engine step per rendered frame, independent of drawing.
    ///
    /// Ordering matters: events first, then placements deferred from the
    /// previous cycle, then the panel machine, then the reveal machine, and
    /// the input-interactivity sync last.
    pub fn advance(&mut self, now: Instant) {
        self.process_events();

        // Bubbles spawned last cycle have settled measurements by now
        self.state.flush_pending_placements(&self.probe);

        // The panel follows the user's request but never preempts a slide
        if self.state.panel_requested && self.state.panel.state() == PanelState::Closed {
            self.launcher.deactivate();
            self.state.panel.request_open(now);
        }
        if !self.state.panel_requested {
            self.state.panel.request_close(now);
        }

        match self.state.panel.tick(now) {
            Some(PanelTransition::Opened) => {
                self.input.activate();
            }
            Some(PanelTransition::Closed) => {
                // Conversation dies with the panel; in-flight reveals are
                // abandoned, control returns to the launcher
                self.state.clear_conversation();
                self.scheduler.clear();
                self.launcher.reactivate();
            }
            None => {}
        }

        self.scheduler.tick(
            now,
            &mut self.state.bubbles,
            &mut self.state.layout,
            &self.probe,
            &self.action_tx,
        );

        // Input follows the live online flag every tick
        self.input.interactable = self.state.bot_online;
    }
}

impl eframe::App for BotPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance(Instant::now());

        // Keep slides and reveals stepping even without input events
        ctx.request_repaint_after(SLIDE_INTERVAL);

        self.render_launcher_bar(ctx);

        if self.state.panel.is_visible() {
            self.render_chat_panel(ctx);
        }
    }
}
