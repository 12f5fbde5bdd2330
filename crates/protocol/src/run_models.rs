//! Pipeline run records.
//!
//! This module defines the structures describing a single mock pipeline run
//! as it is displayed in the dashboard's run table.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Lifecycle status of a pipeline run.
///
/// A run is in exactly one of these states. Only finished runs
/// (`Succeeded` or `Failed`) have an end time and a duration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Run is still executing.
    Running,

    /// Run finished successfully.
    Succeeded,

    /// Run finished with an error.
    Failed,
}

impl RunStatus {
    /// All statuses, in the order used by the generator.
    pub const ALL: [RunStatus; 3] = [RunStatus::Running, RunStatus::Succeeded, RunStatus::Failed];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Running => "Running",
            RunStatus::Succeeded => "Succeeded",
            RunStatus::Failed => "Failed",
        }
    }

    /// Whether the run has reached a terminal state.
    pub fn is_finished(self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single pipeline run for the selected day.
///
/// `end_time` and `duration_ms` are `Some` if and only if the status is not
/// [`RunStatus::Running`]. `sla_met` is `false` for running runs; use
/// [`PipelineRun::sla_outcome`] when "not applicable" must be distinguished
/// from "violated".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRun {
    /// Sequential display name, e.g. `Pipeline 007`.
    pub name: String,

    /// Current status.
    pub status: RunStatus,

    /// When the run started.
    pub start_time: NaiveDateTime,

    /// When the run finished. `None` while running.
    pub end_time: Option<NaiveDateTime>,

    /// Wall-clock duration in milliseconds. `None` while running.
    #[ts(type = "number | null")]
    pub duration_ms: Option<u64>,

    /// Whether the run finished within the SLA threshold.
    pub sla_met: bool,

    /// Rows read from the source.
    #[ts(type = "number")]
    pub total_rows: u64,

    /// Rows that made it through the pipeline. Never exceeds `total_rows`.
    #[ts(type = "number")]
    pub processed_rows: u64,
}

impl PipelineRun {
    /// Rows dropped by filtering.
    pub fn filtered_rows(&self) -> u64 {
        self.total_rows.saturating_sub(self.processed_rows)
    }

    /// Share of rows filtered out, in percent.
    ///
    /// Returns `None` when `total_rows` is zero.
    pub fn filtered_percent(&self) -> Option<f64> {
        if self.total_rows == 0 {
            return None;
        }
        Some(self.filtered_rows() as f64 / self.total_rows as f64 * 100.0)
    }

    /// SLA result, or `None` when the run has not finished.
    pub fn sla_outcome(&self) -> Option<bool> {
        self.status.is_finished().then_some(self.sla_met)
    }
}
