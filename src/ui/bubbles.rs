//! Bubble drawing at engine-computed offsets.
//!
//! The engine owns every position and size; this module only paints. Bubbles
//! are drawn inside the scroll content at `top = -y - height`, the slot the
//! layout stack assigned.

use eframe::egui::{self, Color32, FontId, Pos2, Rect};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::bubble::{self, Bubble, BubbleContent, FONT_SIZE, LINE_HEIGHT};
use crate::protocol::Sender;
use crate::ui::theme::PanelTheme;

/// Fixed bubble width inside the panel column.
pub const BUBBLE_WIDTH: f32 = 280.0;
/// Corner rounding for bubble containers.
const BUBBLE_ROUNDING: f32 = 8.0;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://[^\s]+)").expect("URL regex pattern is valid"));

/// Paint one bubble into the scroll content area.
///
/// `origin` is the top-left of the scroll content; `content_width` its full
/// width. `time` drives the thinking animation.
pub fn render_bubble(
    ui: &mut egui::Ui,
    origin: Pos2,
    content_width: f32,
    bubble: &Bubble,
    theme: &PanelTheme,
    time: f64,
) {
    // the layout stack assigns the slot bottom; derive the top edge
    let top = -bubble.y - bubble.height;
    let center_x = origin.x + content_width / 2.0 + bubble.x;
    let rect = Rect::from_min_size(
        Pos2::new(center_x - BUBBLE_WIDTH / 2.0, origin.y + top),
        egui::vec2(BUBBLE_WIDTH, bubble.height),
    );

    let fill = match bubble.sender {
        Sender::User => theme.user_bubble,
        Sender::Bot => theme.bot_bubble,
        Sender::Unknown => theme.unknown_bubble,
    };
    ui.painter().rect_filled(rect, BUBBLE_ROUNDING, fill);

    let pad = bubble::padding(bubble.sender);
    let inner = Rect::from_min_max(
        Pos2::new(rect.min.x + pad.left, rect.min.y + pad.top),
        Pos2::new(rect.max.x - pad.right, rect.max.y - pad.bottom),
    );

    match &bubble.content {
        BubbleContent::Empty => {}
        BubbleContent::Thinking => render_thinking(ui, inner, theme, time),
        BubbleContent::Text(label) => render_text_lines(ui, inner, label, theme),
        BubbleContent::Image { bytes, .. } => render_image_slot(ui, inner, bytes.is_some(), theme),
    }
}

/// Non-interactive animated dots shown while a reply is pending.
fn render_thinking(ui: &mut egui::Ui, inner: Rect, theme: &PanelTheme, time: f64) {
    let dots = 1 + ((time * 2.0) as usize) % 3;
    ui.painter().text(
        inner.center(),
        egui::Align2::CENTER_CENTER,
        "\u{2022} ".repeat(dots).trim_end(),
        FontId::proportional(FONT_SIZE),
        theme.text_muted,
    );
}

/// Pre-wrapped label text, one galley row per line; lines that carry a URL
/// are tinted like links.
fn render_text_lines(ui: &mut egui::Ui, inner: Rect, label: &str, theme: &PanelTheme) {
    for (row, line) in label.lines().enumerate() {
        let color = if URL_RE.is_match(line) {
            theme.accent
        } else {
            theme.text_primary
        };
        ui.painter().text(
            Pos2::new(inner.min.x, inner.min.y + row as f32 * LINE_HEIGHT),
            egui::Align2::LEFT_TOP,
            line,
            FontId::proportional(FONT_SIZE),
            color,
        );
    }
}

/// Image slot: an outlined frame, highlighted once pixel data arrived.
/// A failed fetch simply leaves the frame empty.
fn render_image_slot(ui: &mut egui::Ui, inner: Rect, loaded: bool, theme: &PanelTheme) {
    let stroke = if loaded {
        egui::Stroke::new(2.0, theme.accent)
    } else {
        egui::Stroke::new(1.0, theme.text_muted)
    };
    ui.painter()
        .rect_stroke(inner, 4.0, stroke, egui::StrokeKind::Inside);
    if loaded {
        ui.painter().rect_filled(
            inner.shrink(4.0),
            2.0,
            Color32::from_gray(90).gamma_multiply(0.4),
        );
    }
}
