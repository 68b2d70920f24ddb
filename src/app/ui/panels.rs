//! The sliding assistant panel: header, bubble stack, input row.

use eframe::egui;

use crate::app::BotPanelApp;
use crate::layout::VIEWPORT_EXPAND_THRESHOLD;
use crate::panel::OPEN_OFFSET;
use crate::ui::bubbles;

/// Top of the fully-open panel, below the launcher bar.
const PANEL_TOP: f32 = 48.0;
/// Outer panel width.
const PANEL_WIDTH: f32 = 360.0;
/// Visible height of the conversation viewport; content grows past it once
/// the layout stack expands.
const VIEW_HEIGHT: f32 = VIEWPORT_EXPAND_THRESHOLD;

impl BotPanelApp {
    /// Render the chat panel at its current slide offset.
    pub(in crate::app) fn render_chat_panel(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();

        // engine offset: OPEN_OFFSET when open, larger while sliding out
        let slide = self.state.panel.offset() - OPEN_OFFSET;
        let panel_x = ctx.screen_rect().center().x - PANEL_WIDTH / 2.0;

        // consume the pending scroll request before building the scroll area
        let scroll_to_bottom = self.state.layout.take_scroll_to_bottom();
        let content_height = self.state.layout.viewport_height();

        egui::Area::new(egui::Id::new("assistant_panel"))
            .fixed_pos(egui::pos2(panel_x, PANEL_TOP + slide))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme.panel_fill)
                    .stroke(egui::Stroke::new(1.0, theme.panel_border))
                    .corner_radius(10.0)
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.set_width(PANEL_WIDTH - 20.0);

                        // header: title, status, close
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("Assistant").strong().size(16.0));
                            let status = if self.state.bot_online {
                                egui::RichText::new("online").color(theme.online)
                            } else {
                                egui::RichText::new("offline").color(theme.offline)
                            };
                            ui.label(status.size(12.0));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("x").clicked() {
                                        self.state.panel_requested = false;
                                    }
                                },
                            );
                        });
                        ui.separator();

                        let mut scroll = egui::ScrollArea::vertical()
                            .max_height(VIEW_HEIGHT)
                            .auto_shrink([false, false]);
                        if scroll_to_bottom {
                            scroll = scroll
                                .vertical_scroll_offset((content_height - VIEW_HEIGHT).max(0.0));
                        }

                        scroll.show(ui, |ui| {
                            let width = ui.available_width();
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(width, content_height),
                                egui::Sense::hover(),
                            );
                            let time = ui.input(|i| i.time);
                            for bubble in self.state.bubbles.iter() {
                                bubbles::render_bubble(ui, rect.min, width, bubble, &theme, time);
                            }
                        });

                        ui.separator();
                        self.render_input_row(ui);
                    });
            });
    }
}
