use crate::domain::features::FieldSpec;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_MODEL_PATH: &str = "logistic_regression_model.json";

/// Serialization of the model artifact on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelFormat {
    /// `{"coefficients": [..], "intercept": .., "classes": [0, 1]}`
    #[default]
    Linear,
    /// serde_json dump of a SmartCore `LogisticRegression`
    SmartCore,
}

impl FromStr for ModelFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(ModelFormat::Linear),
            "smartcore" => Ok(ModelFormat::SmartCore),
            _ => anyhow::bail!(
                "Invalid MODEL_FORMAT: {}. Must be 'linear' or 'smartcore'",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" | "pt-br" | "pt_br" => Ok(Language::Pt),
            _ => anyhow::bail!("Invalid APP_LANGUAGE: {}. Must be 'en' or 'pt'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub model_format: ModelFormat,
    pub price: FieldSpec,
    pub price_ratio: FieldSpec,
    pub language: Language,
    pub show_emoji: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            model_format: ModelFormat::default(),
            price: FieldSpec::price(FieldSpec::PRICE_DEFAULT),
            price_ratio: FieldSpec::price_ratio(FieldSpec::RATIO_DEFAULT),
            language: Language::default(),
            show_emoji: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        let model_format = match env::var("MODEL_FORMAT") {
            Ok(s) => ModelFormat::from_str(&s).context("Failed to parse MODEL_FORMAT")?,
            Err(_) => ModelFormat::default(),
        };

        let language = match env::var("APP_LANGUAGE") {
            Ok(s) => Language::from_str(&s).context("Failed to parse APP_LANGUAGE")?,
            Err(_) => Language::default(),
        };

        let price_default = env::var("PRICE_DEFAULT")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(FieldSpec::PRICE_DEFAULT);

        let ratio_default = env::var("RATIO_DEFAULT")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(FieldSpec::RATIO_DEFAULT);

        let show_emoji = env::var("SHOW_EMOJI")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        Ok(Config {
            model_path,
            model_format,
            price: FieldSpec::price(price_default),
            price_ratio: FieldSpec::price_ratio(ratio_default),
            language,
            show_emoji,
        })
    }
}
