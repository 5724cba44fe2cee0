//! Price / ratio form with its submit button.

use crate::config::Config;
use crate::domain::features::{FeatureVector, FieldSpec};
use crate::infrastructure::i18n::I18nService;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct InputForm {
    price_spec: FieldSpec,
    ratio_spec: FieldSpec,
    pub price: f64,
    pub price_ratio: f64,
}

impl InputForm {
    pub fn new(price_spec: FieldSpec, ratio_spec: FieldSpec) -> Self {
        Self {
            price_spec,
            ratio_spec,
            price: price_spec.default,
            price_ratio: ratio_spec.default,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.price, config.price_ratio)
    }

    /// Current values, always within the declared bounds.
    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(
            self.price_spec.clamp(self.price),
            self.ratio_spec.clamp(self.price_ratio),
        )
    }

    /// Draws the form. Returns `true` on the frame the submit button was clicked.
    pub fn show(&mut self, ui: &mut egui::Ui, i18n: &I18nService) -> bool {
        ui.label(
            egui::RichText::new(i18n.t("form_heading"))
                .size(30.0)
                .strong()
                .color(DesignSystem::ACCENT_PRIMARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label(i18n.t("form_help_price"));
        ui.label(i18n.t("form_help_ratio"));
        ui.indent("ratio_help", |ui| {
            ui.label(format!("• {}", i18n.t("form_help_ratio_above")));
            ui.label(format!("• {}", i18n.t("form_help_ratio_below")));
        });
        ui.label(
            egui::RichText::new(i18n.t("form_help_outro")).color(DesignSystem::TEXT_SECONDARY),
        );
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.columns(2, |cols| {
            number_field(&mut cols[0], i18n.t("price_label"), &mut self.price, &self.price_spec);
            number_field(
                &mut cols[1],
                i18n.t("ratio_label"),
                &mut self.price_ratio,
                &self.ratio_spec,
            );
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        let button = egui::Button::new(
            egui::RichText::new(format!("🚀 {}", i18n.t("submit_button")))
                .size(16.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        )
        .fill(DesignSystem::ACCENT_PRIMARY)
        .min_size(egui::vec2(ui.available_width(), 40.0));

        ui.add(button).clicked()
    }
}

/// Labeled numeric control with -/+ buttons that move by exactly one step.
fn number_field(ui: &mut egui::Ui, label: &str, value: &mut f64, spec: &FieldSpec) {
    ui.label(label);
    ui.horizontal(|ui| {
        if ui.small_button("−").clicked() {
            *value = spec.step_by(*value, -1);
        }
        ui.add(
            egui::DragValue::new(&mut *value)
                .range(spec.min..=spec.max)
                .speed(spec.step)
                .fixed_decimals(FieldSpec::DECIMALS),
        );
        if ui.small_button("+").clicked() {
            *value = spec.step_by(*value, 1);
        }
    });
    *value = spec.normalize(*value);
}
