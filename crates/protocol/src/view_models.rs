//! View vocabulary shared by the TUI and the CLI.
//!
//! Sort keys mirror the nine sortable columns of the run table, in column
//! order. Theme values are persisted as the strings `"dark"` and `"light"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// A sortable column of the run table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Name,
    Status,
    StartTime,
    EndTime,
    Duration,
    SlaMet,
    TotalRows,
    ProcessedRows,
    FilteredPercent,
}

impl SortKey {
    /// All keys in column order.
    pub const ALL: [SortKey; 9] = [
        SortKey::Name,
        SortKey::Status,
        SortKey::StartTime,
        SortKey::EndTime,
        SortKey::Duration,
        SortKey::SlaMet,
        SortKey::TotalRows,
        SortKey::ProcessedRows,
        SortKey::FilteredPercent,
    ];

    /// Column header text.
    pub fn title(self) -> &'static str {
        match self {
            SortKey::Name => "Pipeline Name",
            SortKey::Status => "Status",
            SortKey::StartTime => "Start DT",
            SortKey::EndTime => "End DT",
            SortKey::Duration => "Duration",
            SortKey::SlaMet => "SLA",
            SortKey::TotalRows => "Total Rows",
            SortKey::ProcessedRows => "Processed Rows",
            SortKey::FilteredPercent => "Filtered %",
        }
    }

    /// Short name accepted on the command line and in slash commands.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Status => "status",
            SortKey::StartTime => "start",
            SortKey::EndTime => "end",
            SortKey::Duration => "duration",
            SortKey::SlaMet => "sla",
            SortKey::TotalRows => "total",
            SortKey::ProcessedRows => "processed",
            SortKey::FilteredPercent => "filtered",
        }
    }

    /// Key for the 1-based column number, as bound to the digit keys.
    pub fn from_column(column: usize) -> Option<Self> {
        column.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// 1-based column number.
    pub fn column(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).map_or(0, |i| i + 1)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "status" => Ok(SortKey::Status),
            "start" | "start-time" => Ok(SortKey::StartTime),
            "end" | "end-time" => Ok(SortKey::EndTime),
            "duration" => Ok(SortKey::Duration),
            "sla" | "sla-met" => Ok(SortKey::SlaMet),
            "total" | "total-rows" => Ok(SortKey::TotalRows),
            "processed" | "processed-rows" => Ok(SortKey::ProcessedRows),
            "filtered" | "filtered-percent" => Ok(SortKey::FilteredPercent),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Sort direction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Colour theme of the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}
