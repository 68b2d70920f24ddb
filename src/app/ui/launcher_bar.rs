//! Launcher strip with the Assistant toggle and bot status.

use eframe::egui;

use crate::app::BotPanelApp;

impl BotPanelApp {
    /// Render the launcher bar at the top of the window.
    ///
    /// The Assistant button only opens the panel; closing happens from the
    /// panel's own header. While the panel owns the screen the launcher is
    /// inert, until the close animation hands control back.
    pub(in crate::app) fn render_launcher_bar(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();

        egui::TopBottomPanel::top("launcher_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("botpanel").strong());
                ui.separator();

                let open_clicked = ui
                    .add_enabled(self.launcher.is_active(), egui::Button::new("Assistant"))
                    .clicked();
                if open_clicked {
                    self.state.panel_requested = true;
                }

                // bot status dot
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                let color = if self.state.bot_online {
                    theme.online
                } else {
                    theme.offline
                };
                ui.painter().circle_filled(rect.center(), 4.0, color);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // theme switch
                    let next = if self.settings.theme == "light" {
                        "dark"
                    } else {
                        "light"
                    };
                    if ui.button(next).clicked() {
                        self.settings.theme = next.to_string();
                        ctx.set_visuals(if self.settings.theme == "light" {
                            egui::Visuals::light()
                        } else {
                            egui::Visuals::dark()
                        });
                    }

                    // most recent backend lifecycle line
                    if let Some(line) = self.state.system_log.last() {
                        ui.label(
                            egui::RichText::new(line.as_str())
                                .color(theme.text_muted)
                                .size(12.0),
                        );
                    }
                });
            });
        });
    }
}
