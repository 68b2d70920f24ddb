//! Message input row with history navigation and refocus.

use eframe::egui;

use crate::app::BotPanelApp;

impl BotPanelApp {
    /// Render the input row at the bottom of the panel frame.
    ///
    /// The field is interactable only while the bot is online; Enter sends
    /// and keeps focus so the user can type the next message immediately.
    pub(in crate::app) fn render_input_row(&mut self, ui: &mut egui::Ui) {
        let theme = self.get_theme();
        let interactable = self.input.interactable;

        egui::Frame::new()
            .fill(theme.input_fill)
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(8, 6))
            .show(ui, |ui| {
                let hint = if interactable {
                    "Type a message..."
                } else {
                    "Bot is offline"
                };
                let response = ui.add_enabled(
                    interactable,
                    egui::TextEdit::singleline(&mut self.input.message_input)
                        .desired_width(ui.available_width() - 4.0)
                        .frame(false)
                        .hint_text(hint),
                );

                if self.input.take_focus_request() {
                    response.request_focus();
                }

                // Input history navigation
                if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                    self.input.history_up();
                }
                if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                    self.input.history_down();
                }

                let enter_pressed = response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if enter_pressed && interactable {
                    let text = self.input.message_input.trim().to_string();
                    if self.send_user_message(&text) {
                        self.input.message_input.clear();
                    }
                    response.request_focus();
                }
            });
    }
}
