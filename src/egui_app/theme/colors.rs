//! Color Constants
//!
//! The warm brown/tan palette used by the entry form.

use eframe::egui::Color32;

/// Window background - Dark brown
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Form card background - Medium brown
pub const CARD_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Input background - Light tan
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xC6, 0xB2, 0x9E);

/// Save button
pub const ACCENT: Color32 = Color32::from_rgb(0x8D, 0x5B, 0x3F);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);
