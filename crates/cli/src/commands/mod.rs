pub mod dashboard;
pub mod init;
pub mod runs;
pub mod summary;

use crate::DataOptions;
use chrono::Utc;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use df_core::config::{load_config, AppConfig};
use df_core::state::{DashboardState, PreferenceStore};
use std::path::Path;

pub fn load(root: &Path) -> Result<AppConfig> {
    load_config(root)
        .wrap_err_with(|| format!("failed to load configuration under {}", root.display()))
}

/// Build the dashboard state, applying `--seed` and `--date` over the
/// configuration.
pub fn build_state(
    config: &AppConfig,
    data: &DataOptions,
    store: Box<dyn PreferenceStore>,
) -> DashboardState {
    let mut dashboard = config.dashboard.clone();
    if data.seed.is_some() {
        dashboard.seed = data.seed;
    }
    let date = data.date.unwrap_or_else(|| Utc::now().date_naive());
    DashboardState::from_config(&dashboard, date, store)
}
