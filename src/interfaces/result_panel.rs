use crate::infrastructure::i18n::I18nService;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::{Notice, ResultView};
use eframe::egui;

pub fn render_notice(ui: &mut egui::Ui, notice: &Notice) {
    let color = DesignSystem::notice_color(notice.level);
    Card::new().accent(color).show(ui, |ui| {
        ui.label(egui::RichText::new(&notice.message).color(color));
    });
    ui.add_space(DesignSystem::SPACING_SMALL);
}

/// Draws the predicted-class card. The confidence block only appears when
/// the view carries both a confidence and a tone.
pub fn render_result(ui: &mut egui::Ui, view: &ResultView, i18n: &I18nService) {
    if let Some(notice) = &view.notice {
        render_notice(ui, notice);
    }

    Card::new().title(i18n.t("result_heading")).show(ui, |ui| {
        ui.label(
            egui::RichText::new(&view.label)
                .size(25.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );

        if let (Some(text), Some(tone)) = (view.confidence_text(), view.tone) {
            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.label(
                egui::RichText::new(i18n.t("confidence_heading"))
                    .size(18.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(text)
                    .size(40.0)
                    .strong()
                    .color(DesignSystem::tone_color(tone)),
            );
        }
    });
}
