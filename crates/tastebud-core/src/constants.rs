//! Cuisine tags and default values shared across the workspace.

/// Sichuan cuisine; the tag for the spicy-regional signal family.
pub const CUISINE_SICHUAN: &str = "川菜";

/// Japanese cuisine; the tag for the East-Asian signal family.
pub const CUISINE_JAPANESE: &str = "日料";

/// Cantonese cuisine; the tag for the steamed/roast-regional signal family.
pub const CUISINE_CANTONESE: &str = "粤菜";

/// Home-style cooking. Fallback for dishes and lists no rule recognizes.
pub const CUISINE_HOME_STYLE: &str = "家常菜";

/// Default fraction of profiles that must share an attribute for it to be common.
pub const DEFAULT_MAJORITY_RATIO: f64 = 0.5;

/// Input cleaning is off by default so `NormalizedDish::original` stays verbatim.
pub const DEFAULT_CLEAN_INPUT: bool = false;

/// Tolerance used when comparing derived floating-point weights.
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "tastebud.toml";

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "TASTEBUD_LOG";
