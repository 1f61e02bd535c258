//! Theme Module
//!
//! Color scheme and styling helpers for the entry form.
//!
//! # Usage
//!
//! ```rust,no_run
//! use entrybox::egui_app::theme::styles;
//!
//! # fn example(ctx: &eframe::egui::Context, ui: &mut eframe::egui::Ui) {
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     // Form content
//! });
//! # }
//! ```

pub mod colors;
pub mod styles;
