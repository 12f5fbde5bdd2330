//! Main entry point for the df-tui binary.
//!
//! Opens the dashboard for the current directory's configuration. The
//! `dataflow-dash` CLI offers the same with logging and flags.

use anyhow::{Context, Result};
use chrono::Utc;
use df_core::config::load_config;
use df_core::state::{DashboardState, FileStore};
use df_tui::run_app;

#[tokio::main]
async fn main() -> Result<()> {
    let root = std::env::current_dir().context("failed to resolve current directory")?;
    let config = load_config(&root).context("failed to load configuration")?;
    let store = FileStore::open(config.state_file()).context("failed to open preference store")?;

    let state =
        DashboardState::from_config(&config.dashboard, Utc::now().date_naive(), Box::new(store));
    run_app(state).await
}
