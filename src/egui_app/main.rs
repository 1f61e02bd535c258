/**
 * entrybox Form - Main Entry Point
 *
 * Opens the native entry form. The backend URL is taken from
 * `CLIENT_API_URL` (default `http://127.0.0.1:5003`).
 */
use eframe::egui;
use entrybox::egui_app::{theme::styles, views, FormState};

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 360.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "entrybox",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(FormApp::default()))
        }),
    )
}

#[derive(Default)]
struct FormApp {
    state: FormState,
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_submit_result();

        views::render_main_panel(ctx, &mut self.state);

        if self.state.is_loading() {
            ctx.request_repaint();
        }
    }
}
