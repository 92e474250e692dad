//! Logging bootstrap for binaries and test harnesses embedding the pipeline.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

/// Install a global `fmt` subscriber filtered by `TASTEBUD_LOG`.
///
/// Falls back to `warn` when the variable is unset or unparsable. Returns
/// `false` if a global subscriber was already installed, so repeated calls are
/// harmless.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
