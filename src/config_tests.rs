use crate::config::{Config, DEFAULT_MODEL_PATH, Language, ModelFormat};
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const VARS: [&str; 6] = [
    "MODEL_PATH",
    "MODEL_FORMAT",
    "PRICE_DEFAULT",
    "RATIO_DEFAULT",
    "APP_LANGUAGE",
    "SHOW_EMOJI",
];

fn clear_vars() {
    for var in VARS {
        // SAFETY: serialized by ENV_LOCK
        unsafe { env::remove_var(var) };
    }
}

fn set_var(key: &str, value: &str) {
    // SAFETY: serialized by ENV_LOCK
    unsafe { env::set_var(key, value) };
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    let config = Config::from_env().unwrap();

    assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert_eq!(config.model_format, ModelFormat::Linear);
    assert_eq!(config.language, Language::En);
    assert!(!config.show_emoji);
    assert_eq!(config.price.default, 735.0);
    assert_eq!(config.price_ratio.default, 1.48);
    assert_eq!(config.price_ratio.max, 100.0);
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    set_var("MODEL_PATH", "/tmp/model.json");
    set_var("MODEL_FORMAT", "SmartCore");
    set_var("RATIO_DEFAULT", "25.0");
    set_var("APP_LANGUAGE", "pt-BR");
    set_var("SHOW_EMOJI", "true");

    let config = Config::from_env().unwrap();

    assert_eq!(config.model_path, PathBuf::from("/tmp/model.json"));
    assert_eq!(config.model_format, ModelFormat::SmartCore);
    assert_eq!(config.price_ratio.default, 25.0);
    assert_eq!(config.language, Language::Pt);
    assert!(config.show_emoji);

    clear_vars();
}

#[test]
fn test_config_invalid_numbers_fall_back() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    set_var("PRICE_DEFAULT", "lots");
    set_var("RATIO_DEFAULT", "NaN");

    let config = Config::from_env().unwrap();
    assert_eq!(config.price.default, 735.0);
    assert_eq!(config.price_ratio.default, 1.48);

    // Out-of-range defaults are clamped, not rejected
    set_var("PRICE_DEFAULT", "50000");
    let config = Config::from_env().unwrap();
    assert_eq!(config.price.default, 10_000.0);

    clear_vars();
}

#[test]
fn test_config_invalid_format_is_an_error() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    set_var("MODEL_FORMAT", "pickle");
    let err = Config::from_env().unwrap_err();
    assert!(format!("{:#}", err).contains("pickle"));

    clear_vars();
}
