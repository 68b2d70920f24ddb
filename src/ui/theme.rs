//! Color tables and application-wide style tweaks.

use eframe::egui::{self, Color32};

/// Theme colors for the assistant panel.
#[derive(Debug, Clone)]
pub struct PanelTheme {
    pub panel_fill: Color32,
    pub panel_border: Color32,
    pub input_fill: Color32,
    pub user_bubble: Color32,
    pub bot_bubble: Color32,
    pub unknown_bubble: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub online: Color32,
    pub offline: Color32,
}

impl PanelTheme {
    pub fn dark() -> Self {
        Self {
            panel_fill: Color32::from_rgb(28, 28, 34),
            panel_border: Color32::from_rgb(55, 55, 64),
            input_fill: Color32::from_rgb(45, 45, 52),
            user_bubble: Color32::from_rgb(47, 81, 133),
            bot_bubble: Color32::from_rgb(52, 52, 60),
            unknown_bubble: Color32::from_rgb(70, 60, 44),
            text_primary: Color32::from_rgb(225, 225, 230),
            text_muted: Color32::from_rgb(140, 140, 150),
            accent: Color32::from_rgb(100, 150, 250),
            online: Color32::from_rgb(100, 200, 120),
            offline: Color32::from_rgb(200, 90, 90),
        }
    }

    pub fn light() -> Self {
        Self {
            panel_fill: Color32::from_rgb(246, 246, 248),
            panel_border: Color32::from_rgb(205, 205, 212),
            input_fill: Color32::WHITE,
            user_bubble: Color32::from_rgb(200, 220, 250),
            bot_bubble: Color32::from_rgb(228, 228, 233),
            unknown_bubble: Color32::from_rgb(240, 228, 200),
            text_primary: Color32::from_rgb(30, 30, 36),
            text_muted: Color32::from_rgb(120, 120, 130),
            accent: Color32::from_rgb(45, 100, 210),
            online: Color32::from_rgb(40, 150, 70),
            offline: Color32::from_rgb(190, 60, 60),
        }
    }
}

/// Apply spacing and rounding defaults once at startup.
pub fn apply_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.visuals.widgets.noninteractive.corner_radius = 6.0.into();
    style.visuals.widgets.inactive.corner_radius = 6.0.into();
    style.visuals.widgets.hovered.corner_radius = 6.0.into();
    style.visuals.widgets.active.corner_radius = 6.0.into();
    ctx.set_style(style);
}
