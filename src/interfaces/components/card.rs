use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Rounded container with an optional heading
pub struct Card {
    title: Option<String>,
    accent: Option<egui::Color32>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            accent: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Draws a colored border, used for banners
    pub fn accent(mut self, color: egui::Color32) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let mut frame = DesignSystem::card_frame();

        if let Some(color) = self.accent {
            frame = frame
                .stroke(egui::Stroke::new(1.5, color))
                .fill(color.linear_multiply(0.12));
        }

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());

            if let Some(title) = self.title {
                ui.label(
                    egui::RichText::new(title)
                        .size(22.0)
                        .color(DesignSystem::TEXT_PRIMARY)
                        .strong(),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            add_contents(ui)
        })
    }
}
