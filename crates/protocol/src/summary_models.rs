//! Daily ingestion summaries per source system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Upstream systems that feed the pipelines.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SourceSystem {
    SalesforceCrm,
    SapEcc,
    GoogleAnalytics,
    CustomDatabase,
}

impl SourceSystem {
    /// All sources, in display order.
    pub const ALL: [SourceSystem; 4] = [
        SourceSystem::SalesforceCrm,
        SourceSystem::SapEcc,
        SourceSystem::GoogleAnalytics,
        SourceSystem::CustomDatabase,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SourceSystem::SalesforceCrm => "Salesforce CRM",
            SourceSystem::SapEcc => "SAP ECC",
            SourceSystem::GoogleAnalytics => "Google Analytics",
            SourceSystem::CustomDatabase => "Custom Database",
        }
    }
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Row count ingested on a given day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[ts(export)]
pub struct DayCount {
    pub date: NaiveDate,
    #[ts(type = "number")]
    pub count: u64,
}

/// Ingestion counts for one source on the selected day and on the
/// previous business day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DailySourceSummary {
    pub source_system: SourceSystem,
    pub current_day: DayCount,
    pub previous_day: DayCount,
}

impl DailySourceSummary {
    /// `current - previous`, signed.
    pub fn difference(&self) -> i64 {
        self.current_day.count as i64 - self.previous_day.count as i64
    }

    /// Difference relative to the previous business day, in percent.
    ///
    /// Returns `None` when the previous day's count is zero.
    pub fn percent_difference(&self) -> Option<f64> {
        if self.previous_day.count == 0 {
            return None;
        }
        Some(self.difference() as f64 / self.previous_day.count as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(current: u64, previous: u64) -> DailySourceSummary {
        let day = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let prev = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        DailySourceSummary {
            source_system: SourceSystem::SapEcc,
            current_day: DayCount { date: day, count: current },
            previous_day: DayCount { date: prev, count: previous },
        }
    }

    #[test]
    fn test_difference_is_signed() {
        assert_eq!(summary(120, 100).difference(), 20);
        assert_eq!(summary(80, 100).difference(), -20);
    }

    #[test]
    fn test_percent_difference() {
        assert_eq!(summary(150, 100).percent_difference(), Some(50.0));
        assert_eq!(summary(75, 100).percent_difference(), Some(-25.0));
        assert_eq!(summary(75, 0).percent_difference(), None);
    }

    #[test]
    fn test_source_serialization() {
        let json = serde_json::to_string(&SourceSystem::GoogleAnalytics).unwrap();
        assert_eq!(json, "\"google-analytics\"");
    }
}
