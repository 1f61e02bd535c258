use eframe::egui;

use crate::egui_app::state::FormState;
use crate::egui_app::theme::colors;

pub mod form_view;

pub fn render_main_panel(ctx: &egui::Context, state: &mut FormState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| form_view::render(ui, state));
}
