use eframe::egui;

use crate::egui_app::state::FormState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut FormState) {
    ui.vertical_centered(|ui| {
        let top_space = (ui.available_height() - 220.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        styles::card_frame().show(ui, |ui| {
            ui.set_width(320.0);

            ui.label(egui::RichText::new("entrybox").size(28.0).strong().color(colors::TEXT_LIGHT));
            ui.add_space(16.0);

            let input = ui.add_sized(
                [300.0, 28.0],
                egui::TextEdit::singleline(&mut state.message_input)
                    .hint_text("Enter text")
                    .text_color(colors::TEXT_DARK),
            );
            let submitted_with_enter =
                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(12.0);

            let save = ui.add_enabled(
                !state.is_loading(),
                egui::Button::new(egui::RichText::new("Save").color(colors::TEXT_LIGHT))
                    .fill(colors::ACCENT)
                    .min_size(egui::vec2(120.0, 32.0)),
            );

            if save.clicked() || submitted_with_enter {
                state.handle_submit();
            }

            if state.is_loading() {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Saving...").color(colors::TEXT_SECONDARY));
                });
            } else if let Some(status) = &state.status {
                ui.add_space(12.0);
                let color = match &state.last_outcome {
                    Some(outcome) if outcome.is_saved() => colors::SUCCESS,
                    _ => colors::ERROR,
                };
                ui.label(egui::RichText::new(status).color(color));
            }
        });

        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("Backend: {}", state.config.server_url()))
                .small()
                .color(colors::TEXT_SECONDARY),
        );
    });
}
