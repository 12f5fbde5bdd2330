//! `dataflow-dash tui`: the interactive dashboard.

use super::{build_state, load};
use crate::logging::init_file_logging;
use crate::DataOptions;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use df_core::state::FileStore;
use std::path::Path;
use tracing::info;

pub async fn run(root: &Path, data: &DataOptions) -> Result<()> {
    let config = load(root)?;
    let _guard = init_file_logging(&config.log_dir(), &config.dashboard.log_level)?;

    let store = FileStore::open(config.state_file()).wrap_err("failed to open preference store")?;
    info!(path = %store.path().display(), "opened preference store");

    let state = build_state(&config, data, Box::new(store));
    df_tui::run_app(state).await.map_err(|e| eyre!(e))
}
