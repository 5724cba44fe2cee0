use crate::domain::errors::ModelLoadError;
use crate::domain::prediction::{Outcome, PriceClass};
use crate::infrastructure::i18n::I18nService;

/// Styling role of the result; the design system maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Banner shown above the result card
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Everything the result panel draws for one interaction
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub confidence: Option<f64>,
    pub tone: Option<Tone>,
    pub notice: Option<Notice>,
}

impl ResultView {
    pub fn new(label: impl Into<String>, confidence: Option<f64>, tone: Option<Tone>) -> Self {
        Self {
            label: label.into(),
            confidence,
            tone,
            notice: None,
        }
    }

    pub fn from_outcome(outcome: &Outcome, i18n: &I18nService, show_emoji: bool) -> Self {
        match outcome {
            Outcome::Unclassified => Self::new(i18n.t("unclassified"), None, None),
            Outcome::Classified(prediction) => {
                let (key, emoji, tone) = match prediction.class {
                    PriceClass::OutOfPattern => ("class_out_of_pattern", "🔴", Tone::Alert),
                    PriceClass::Normal => ("class_normal", "✅", Tone::Success),
                };
                let label = if show_emoji {
                    format!("{} {}", emoji, i18n.t(key))
                } else {
                    i18n.t(key).to_string()
                };
                Self::new(label, Some(prediction.confidence_pct()), Some(tone))
            }
            Outcome::Failed(reason) => Self {
                notice: Some(Notice {
                    level: NoticeLevel::Error,
                    message: i18n.tf("inference_failed", &[("error", reason.as_str())]),
                }),
                ..Self::new(i18n.t("classification_error"), None, None)
            },
            Outcome::Unavailable => Self {
                notice: Some(Notice {
                    level: NoticeLevel::Warning,
                    message: i18n.t("model_unavailable").to_string(),
                }),
                ..Self::new(i18n.t("unclassified"), None, None)
            },
        }
    }

    /// `Some("90.0%")` only when both a confidence and a tone are present.
    pub fn confidence_text(&self) -> Option<String> {
        match (self.confidence, self.tone) {
            (Some(pct), Some(_)) => Some(format_confidence(pct)),
            _ => None,
        }
    }
}

pub fn format_confidence(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Message shown for the whole session when the artifact could not be read
pub fn load_error_notice(err: &ModelLoadError, i18n: &I18nService) -> Notice {
    let message = match err {
        ModelLoadError::NotFound { path } => {
            i18n.tf("model_not_found", &[("path", path.display().to_string().as_str())])
        }
        ModelLoadError::Corrupt { reason, .. } => {
            i18n.tf("model_load_failed", &[("error", reason.as_str())])
        }
    };

    Notice {
        level: NoticeLevel::Error,
        message,
    }
}
