//! Dashboard configuration models for `.dataflow-dash/config.toml`.
//!
//! This module defines the structure of the configuration file that
//! controls how much mock data is generated and how it is paged.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// Largest `run-count` accepted from `config.toml`.
pub const MAX_RUN_COUNT: usize = 100_000;

const MS_PER_MINUTE: u64 = 60 * 1000;

/// Represents settings from `.dataflow-dash/config.toml`.
///
/// Every field has a default, so an empty or missing file is valid.
///
/// # Example
///
/// ```toml
/// # .dataflow-dash/config.toml
/// run-count = 150
/// page-size = 10
/// sla-threshold-minutes = 90
/// seed = 42
/// log-level = "debug"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case", default)]
pub struct DashboardConfig {
    /// Number of pipeline runs generated for each selected day.
    pub run_count: usize,

    /// Rows shown per page of the run table.
    pub page_size: usize,

    /// Runs finishing in less than this many minutes meet their SLA.
    #[ts(type = "number")]
    pub sla_threshold_minutes: u64,

    /// Fixed seed for the random generator.
    ///
    /// When set, every session shows the same data for the same date
    /// sequence.
    #[ts(type = "number | null")]
    pub seed: Option<u64>,

    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            run_count: 150,
            page_size: 10,
            sla_threshold_minutes: 90,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// SLA threshold in milliseconds, or `None` if it does not fit in a `u64`.
    pub fn checked_sla_threshold_ms(&self) -> Option<u64> {
        self.sla_threshold_minutes.checked_mul(MS_PER_MINUTE)
    }

    /// SLA threshold in milliseconds, saturating at `u64::MAX`.
    pub fn sla_threshold_ms(&self) -> u64 {
        self.sla_threshold_minutes.saturating_mul(MS_PER_MINUTE)
    }
}
