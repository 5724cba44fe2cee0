use crate::interfaces::view_models::{NoticeLevel, Tone};
use eframe::egui;

/// Dark theme shared by the form and the result panel
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(14, 17, 23); // #0E1117
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(28, 31, 37); // #1C1F25
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(38, 39, 48);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(26, 115, 232); // #1A73E8

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(67, 160, 71); // #43A047
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(229, 57, 53); // #E53935
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 189, 69);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::WHITE;
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);

    // --- Metrics ---

    pub const ROUNDING_LARGE: f32 = 15.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 20.0;
    pub const SPACING_LARGE: f32 = 50.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Result card: rounded, padded, no border
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_LARGE)
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    pub fn tone_color(tone: Tone) -> egui::Color32 {
        match tone {
            Tone::Success => Self::SUCCESS,
            Tone::Alert => Self::DANGER,
        }
    }

    pub fn notice_color(level: NoticeLevel) -> egui::Color32 {
        match level {
            NoticeLevel::Warning => Self::WARNING,
            NoticeLevel::Error => Self::DANGER,
        }
    }
}
