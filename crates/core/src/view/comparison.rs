//! Day-over-day comparison rows for the summary table.

use crate::format::{format_count, format_signed_count, format_signed_percent};
use chrono::NaiveDate;
use df_protocol::{DailySourceSummary, SourceSystem};
use serde::Serialize;

/// A summary with its derived difference columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub source_system: SourceSystem,
    pub current_date: NaiveDate,
    pub current_count: u64,
    pub previous_date: NaiveDate,
    pub previous_count: u64,
    /// `current_count - previous_count`.
    pub difference: i64,
    /// `None` when `previous_count` is zero.
    pub percent_difference: Option<f64>,
}

impl ComparisonRow {
    /// Rendered green when true, red otherwise.
    pub fn is_increase(&self) -> bool {
        self.difference > 0
    }

    pub fn current_label(&self) -> String {
        format!("{} rows", format_count(self.current_count))
    }

    pub fn previous_label(&self) -> String {
        format!("{} rows", format_count(self.previous_count))
    }

    pub fn difference_label(&self) -> String {
        format_signed_count(self.difference)
    }

    pub fn percent_label(&self) -> String {
        format_signed_percent(self.percent_difference)
    }
}

impl From<&DailySourceSummary> for ComparisonRow {
    fn from(summary: &DailySourceSummary) -> Self {
        Self {
            source_system: summary.source_system,
            current_date: summary.current_day.date,
            current_count: summary.current_day.count,
            previous_date: summary.previous_day.date,
            previous_count: summary.previous_day.count,
            difference: summary.difference(),
            percent_difference: summary.percent_difference(),
        }
    }
}

/// Derive one comparison row per summary, preserving order.
pub fn compare_daily(summaries: &[DailySourceSummary]) -> Vec<ComparisonRow> {
    summaries.iter().map(ComparisonRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_protocol::DayCount;

    fn summary(source: SourceSystem, current: u64, previous: u64) -> DailySourceSummary {
        DailySourceSummary {
            source_system: source,
            current_day: DayCount {
                date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
                count: current,
            },
            previous_day: DayCount {
                date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
                count: previous,
            },
        }
    }

    #[test]
    fn test_increase_has_plus_sign() {
        let rows = compare_daily(&[summary(SourceSystem::SapEcc, 3_100_000, 3_000_000)]);
        let row = &rows[0];

        assert_eq!(row.difference, 100_000);
        assert!(row.is_increase());
        assert_eq!(row.difference_label(), "+100,000");
        assert_eq!(row.percent_label(), "+3.33%");
        assert_eq!(row.current_label(), "3,100,000 rows");
    }

    #[test]
    fn test_decrease_has_minus_sign() {
        let rows = compare_daily(&[summary(SourceSystem::CustomDatabase, 900_000, 1_000_000)]);
        let row = &rows[0];

        assert_eq!(row.difference, -100_000);
        assert!(!row.is_increase());
        assert_eq!(row.difference_label(), "-100,000");
        assert_eq!(row.percent_label(), "-10.00%");
    }

    #[test]
    fn test_zero_previous_is_not_applicable() {
        let rows = compare_daily(&[summary(SourceSystem::GoogleAnalytics, 10, 0)]);
        assert_eq!(rows[0].difference, 10);
        assert_eq!(rows[0].percent_difference, None);
        assert_eq!(rows[0].percent_label(), "N/A");
    }

    #[test]
    fn test_order_is_preserved() {
        let input: Vec<_> = SourceSystem::ALL
            .iter()
            .map(|s| summary(*s, 100, 100))
            .collect();
        let rows = compare_daily(&input);
        let sources: Vec<_> = rows.iter().map(|r| r.source_system).collect();
        assert_eq!(sources, SourceSystem::ALL.to_vec());
        assert!(rows.iter().all(|r| r.difference_label() == "0"));
    }
}
