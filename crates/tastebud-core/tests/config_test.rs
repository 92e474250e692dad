//! Tests for the tastebud configuration system.

use std::sync::Mutex;

use tastebud_core::config::{AggregatorConfig, ConfigOverrides, TastebudConfig};
use tastebud_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all TASTEBUD_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "TASTEBUD_CLASSIFIER_CLEAN_INPUT",
        "TASTEBUD_AGGREGATOR_MAJORITY_RATIO",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("tastebud.toml"),
        r#"
[classifier]
clean_input = true

[aggregator]
majority_ratio = 0.75
"#,
    )
    .unwrap();

    std::env::set_var("TASTEBUD_AGGREGATOR_MAJORITY_RATIO", "0.6");

    let overrides = ConfigOverrides {
        clean_input: Some(false),
        ..Default::default()
    };
    let config = TastebudConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Override beats project file.
    assert_eq!(config.classifier.clean_input, Some(false));
    // Env beats project file.
    assert_eq!(config.aggregator.majority_ratio, Some(0.6));

    clear_env_vars();
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = TastebudConfig::load(dir.path(), None).unwrap();
    assert!(!config.classifier.effective_clean_input());
    assert_eq!(config.aggregator.effective_majority_ratio(), 0.5);
}

#[test]
fn test_unparsable_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::env::set_var("TASTEBUD_CLASSIFIER_CLEAN_INPUT", "sometimes");
    let config = TastebudConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.classifier.clean_input, None);

    clear_env_vars();
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("tastebud.toml"), "this is not valid toml {{{{").unwrap();

    match TastebudConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_out_of_range_ratio_rejected() {
    for bad in ["0.0", "1.5", "-0.2"] {
        let toml_str = format!("[aggregator]\nmajority_ratio = {bad}\n");
        match TastebudConfig::from_toml(&toml_str).unwrap_err() {
            ConfigError::ValidationFailed { field, .. } => {
                assert_eq!(field, "aggregator.majority_ratio");
            }
            other => panic!("Expected ValidationFailed for {bad}, got: {:?}", other),
        }
    }
}

#[test]
fn test_ratio_built_in_code_validated() {
    for bad in [f64::NAN, -1.0, 0.0, 1.5] {
        match AggregatorConfig::with_majority_ratio(bad).validate().unwrap_err() {
            ConfigError::ValidationFailed { field, .. } => {
                assert_eq!(field, "aggregator.majority_ratio");
            }
            other => panic!("Expected ValidationFailed for {bad}, got: {:?}", other),
        }
    }
    assert!(AggregatorConfig::with_majority_ratio(0.5).validate().is_ok());
    assert!(AggregatorConfig::default().validate().is_ok());
}

#[test]
fn test_ratio_of_one_accepted() {
    let config = TastebudConfig::from_toml("[aggregator]\nmajority_ratio = 1.0\n").unwrap();
    assert_eq!(config.aggregator.effective_majority_ratio(), 1.0);
}

#[test]
fn test_unknown_keys_ignored() {
    let config =
        TastebudConfig::from_toml("[classifier]\nclean_input = true\nfuture_knob = 3\n").unwrap();
    assert!(config.classifier.effective_clean_input());
}

#[test]
fn test_toml_roundtrip() {
    let config = TastebudConfig::from_toml("[aggregator]\nmajority_ratio = 0.8\n").unwrap();
    let serialized = config.to_toml().unwrap();
    assert_eq!(TastebudConfig::from_toml(&serialized).unwrap(), config);
}
