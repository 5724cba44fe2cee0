use crate::application::inference;
use crate::config::Config;
use crate::domain::prediction::Outcome;
use crate::infrastructure::i18n::I18nService;
use crate::infrastructure::model_store::{ModelStore, SharedModel};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::input_form::InputForm;
use crate::interfaces::result_panel::{render_notice, render_result};
use crate::interfaces::view_models::result_view::load_error_notice;
use crate::interfaces::view_models::{Notice, ResultView};
use chrono::Local;
use crossbeam_channel::Receiver;
use eframe::egui;

const MAX_LOG_LINES: usize = 500;

/// Single-window classifier: form on the left, result on the right.
pub struct ClassifierApp {
    i18n: I18nService,
    show_emoji: bool,
    model: Option<SharedModel>,
    load_notice: Option<Notice>,
    form: InputForm,
    outcome: Outcome,
    log_rx: Receiver<String>,
    logs: Vec<String>,
    logs_collapsed: bool,
}

impl ClassifierApp {
    /// Loads the model through `store` (first access reads the file).
    pub fn new(config: &Config, store: &ModelStore, log_rx: Receiver<String>) -> Self {
        let i18n = I18nService::new(config.language);
        let model = store.load();
        let load_notice = store.load_error().map(|e| load_error_notice(e, &i18n));

        Self {
            i18n,
            show_emoji: config.show_emoji,
            model,
            load_notice,
            form: InputForm::from_config(config),
            outcome: Outcome::Unclassified,
            log_rx,
            logs: Vec::new(),
            logs_collapsed: true,
        }
    }

    fn drain_logs(&mut self) {
        self.logs.extend(self.log_rx.try_iter());
        if self.logs.len() > MAX_LOG_LINES {
            let excess = self.logs.len() - MAX_LOG_LINES;
            self.logs.drain(..excess);
        }
    }

    fn submit(&mut self) {
        let features = self.form.features();
        self.outcome = inference::submit(
            self.model.as_deref(),
            features.price,
            features.price_ratio_category,
        );
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("📊 {}", self.i18n.t("window_title")));
                ui.separator();
                ui.label(format!("{}", Local::now().format("%H:%M:%S")));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match &self.model {
                        Some(model) => ui.label(
                            egui::RichText::new(
                                self.i18n.tf("model_status_loaded", &[("name", model.name())]),
                            )
                            .color(DesignSystem::SUCCESS)
                            .small(),
                        ),
                        None => ui.label(
                            egui::RichText::new(self.i18n.t("model_status_missing"))
                                .color(DesignSystem::DANGER)
                                .small(),
                        ),
                    };
                    if ui.small_button(self.i18n.t("log_console")).clicked() {
                        self.logs_collapsed = !self.logs_collapsed;
                    }
                });
            });
        });
    }

    fn render_logs_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("logs_panel")
            .resizable(true)
            .default_height(180.0)
            .show_animated(ctx, !self.logs_collapsed, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("logs_scroll")
                    .auto_shrink([false, true])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.logs {
                            let color = if line.contains("ERROR") {
                                DesignSystem::DANGER
                            } else if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else {
                                DesignSystem::TEXT_SECONDARY
                            };
                            ui.label(egui::RichText::new(line.trim_end()).monospace().color(color));
                        }
                    });
            });
    }
}

impl ClassifierApp {
    /// Draws one frame. The theme is installed once at startup, not here.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.drain_logs();

        self.render_status_bar(ctx);
        self.render_logs_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(notice) = &self.load_notice {
                render_notice(ui, notice);
            }

            ui.columns(2, |cols| {
                if self.form.show(&mut cols[0], &self.i18n) {
                    self.submit();
                }

                cols[1].add_space(DesignSystem::SPACING_LARGE);
                let view = ResultView::from_outcome(&self.outcome, &self.i18n, self.show_emoji);
                render_result(&mut cols[1], &view, &self.i18n);
            });
        });
    }
}

impl eframe::App for ClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
