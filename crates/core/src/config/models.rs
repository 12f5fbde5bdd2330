//! Resolved application configuration.

use df_protocol::DashboardConfig;
use std::path::PathBuf;

/// Dashboard settings plus the data directory they were loaded from.
///
/// The data directory also holds the preference file and the TUI logs:
///
/// ```text
/// .dataflow-dash/
/// ├── config.toml
/// ├── state.json
/// └── logs/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Settings from `config.toml`, or defaults.
    pub dashboard: DashboardConfig,

    /// The `.dataflow-dash` directory.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Default settings rooted at `data_dir`.
    pub fn with_defaults(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            dashboard: DashboardConfig::default(),
            data_dir: data_dir.into(),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// JSON file backing the preference store.
    pub fn state_file(&self) -> PathBuf {
        self.data_dir.join("state.json")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
