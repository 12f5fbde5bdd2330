//! Test fixtures for building dashboard state and sample data.

use chrono::NaiveDate;
use df_core::state::{DashboardState, MemoryStore, PreferenceStore};
use df_protocol::DashboardConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// 2024-05-06, a Monday.
#[allow(dead_code)]
pub fn monday() -> NaiveDate {
    ymd(2024, 5, 6)
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Default configuration with an in-memory store and a fixed seed.
#[allow(dead_code)]
pub fn seeded_state(seed: u64) -> DashboardState {
    seeded_state_with(&DashboardConfig::default(), seed, Box::new(MemoryStore::new()))
}

#[allow(dead_code)]
pub fn seeded_state_with(
    config: &DashboardConfig,
    seed: u64,
    store: Box<dyn PreferenceStore>,
) -> DashboardState {
    DashboardState::new(config, monday(), store, StdRng::seed_from_u64(seed))
}

/// Temporary project directory with a `.dataflow-dash/config.toml`.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project(config_toml: &str) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let data_dir = temp_dir.path().join(".dataflow-dash");
    std::fs::create_dir_all(&data_dir)?;
    std::fs::write(data_dir.join("config.toml"), config_toml)?;
    Ok(temp_dir)
}
