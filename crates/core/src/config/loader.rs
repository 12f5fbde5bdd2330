//! Configuration file loader for the `.dataflow-dash/` directory.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use df_protocol::{DashboardConfig, MAX_RUN_COUNT};
use std::path::Path;
use tracing::debug;

/// Name of the per-project data directory.
pub const DATA_DIR_NAME: &str = ".dataflow-dash";

/// Loads configuration from `<root>/.dataflow-dash/config.toml`.
///
/// If the directory or the file is missing, returns the default
/// configuration rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The file exists but cannot be read
/// - The file is not valid TOML or has fields of the wrong type
/// - `page-size` is zero
/// - `run-count` is above [`MAX_RUN_COUNT`]
/// - `sla-threshold-minutes` does not fit in milliseconds
///
/// # Example
///
/// ```rust,no_run
/// use df_core::config::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."))?;
/// println!("{} runs per day", config.dashboard.run_count);
/// # Ok(())
/// # }
/// ```
pub fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let mut config = AppConfig::with_defaults(root.join(DATA_DIR_NAME));
    let config_path = config.config_file();

    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(config);
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let dashboard: DashboardConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    if let Some(reason) = invalid_reason(&dashboard) {
        return Err(ConfigError::InvalidConfig {
            path: config_path,
            reason,
        });
    }

    config.dashboard = dashboard;
    Ok(config)
}

fn invalid_reason(dashboard: &DashboardConfig) -> Option<String> {
    if dashboard.page_size == 0 {
        return Some("page-size must be greater than zero".to_string());
    }
    if dashboard.run_count > MAX_RUN_COUNT {
        return Some(format!(
            "run-count must be at most {MAX_RUN_COUNT}, got {}",
            dashboard.run_count
        ));
    }
    if dashboard.checked_sla_threshold_ms().is_none() {
        return Some(format!(
            "sla-threshold-minutes is too large: {}",
            dashboard.sla_threshold_minutes
        ));
    }
    None
}
