//! Theme Styling Functions

use eframe::egui::{self, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.override_text_color = Some(colors::TEXT_LIGHT);

    style.visuals.widgets.inactive.bg_fill = colors::ACCENT;
    style.visuals.widgets.inactive.weak_bg_fill = colors::ACCENT;
    style.visuals.widgets.hovered.bg_fill = colors::CARD_BORDER;
    style.visuals.widgets.hovered.weak_bg_fill = colors::CARD_BORDER;

    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_DARK);

    ctx.set_style(style);
}

/// Frame around the form
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(24))
}
