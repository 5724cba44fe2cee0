//! Headless classifier - one submission from the command line
//!
//! Loads the model the same way the window does, classifies a single
//! `[price, price_ratio_category]` pair and prints the predicted class and
//! confidence.
//!
//! # Usage
//! ```sh
//! cargo run --bin classify -- --price 735 --ratio 1.48
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Artifact path (default: logistic_regression_model.json)
//! - `MODEL_FORMAT` - `linear` or `smartcore` (default: linear)
//! - `APP_LANGUAGE` - `en` or `pt` (default: en)

use anyhow::{Result, bail};
use clap::Parser;
use price_outlier::application::inference;
use price_outlier::config::{Config, ModelFormat};
use price_outlier::domain::features::FieldSpec;
use price_outlier::domain::prediction::Outcome;
use price_outlier::infrastructure::i18n::I18nService;
use price_outlier::infrastructure::model_store::ModelStore;
use price_outlier::interfaces::view_models::ResultView;
use price_outlier::interfaces::view_models::result_view::load_error_notice;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Product price, 0 to 10000
    #[arg(long, value_parser = parse_price)]
    price: f64,

    /// Price ratio category, 0 to 100
    #[arg(long, value_parser = parse_ratio)]
    ratio: f64,

    /// Model artifact (overrides MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Artifact format: linear or smartcore (overrides MODEL_FORMAT)
    #[arg(long, value_parser = ModelFormat::from_str)]
    format: Option<ModelFormat>,

    /// Prefix the class with an emoji
    #[arg(long)]
    emoji: bool,
}

fn parse_bounded(s: &str, spec: FieldSpec) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !spec.contains(value) {
        return Err(format!("must be between {} and {}", spec.min, spec.max));
    }
    Ok(value)
}

fn parse_price(s: &str) -> Result<f64, String> {
    parse_bounded(s, FieldSpec::price(FieldSpec::PRICE_DEFAULT))
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    parse_bounded(s, FieldSpec::price_ratio(FieldSpec::RATIO_DEFAULT))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries the result
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = args.model {
        config.model_path = path;
    }
    if let Some(format) = args.format {
        config.model_format = format;
    }
    info!("Using model {:?} ({:?})", config.model_path, config.model_format);

    let i18n = I18nService::new(config.language);
    let store = ModelStore::new(&config.model_path, config.model_format);
    let model = store.load();
    if let Some(err) = store.load_error() {
        eprintln!("{}", load_error_notice(err, &i18n).message);
    }

    let outcome = inference::submit(model.as_deref(), args.price, args.ratio);
    let view = ResultView::from_outcome(&outcome, &i18n, args.emoji || config.show_emoji);

    if let Some(notice) = &view.notice {
        eprintln!("{}", notice.message);
    }

    println!("{}: {}", i18n.t("result_heading"), view.label);
    if let Some(confidence) = view.confidence_text() {
        println!("{}: {}", i18n.t("confidence_heading"), confidence);
    }

    match outcome {
        Outcome::Classified(_) => Ok(()),
        Outcome::Unavailable => bail!("model unavailable"),
        Outcome::Failed(reason) => bail!("classification failed: {}", reason),
        Outcome::Unclassified => bail!("nothing was classified"),
    }
}
