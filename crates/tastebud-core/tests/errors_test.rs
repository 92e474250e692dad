use tastebud_core::errors::*;

#[test]
fn error_codes() {
    assert_eq!(InvalidInputError::EmptyProfileList.error_code(), "INVALID_INPUT");
    let config = ConfigError::FileNotFound {
        path: "tastebud.toml".to_string(),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");
}

#[test]
fn umbrella_conversion_keeps_code() {
    let err: TastebudError = InvalidInputError::EmptyDishList {
        user_id: "user_a".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert_eq!(
        err.to_string(),
        "Invalid input: dish list for user user_a is empty"
    );

    let err: TastebudError = ConfigError::ValidationFailed {
        field: "aggregator.majority_ratio".to_string(),
        message: "out of range".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn logging_init_is_idempotent() {
    tastebud_core::logging::init_logging();
    assert!(!tastebud_core::logging::init_logging());
}
