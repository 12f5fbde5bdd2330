//! Column sorting for the run table.
//!
//! Values that do not apply to a run (end time, duration and SLA of a
//! running run) always sort after every present value, whatever the
//! direction.

use chrono::NaiveDateTime;
use df_protocol::{PipelineRun, SortDirection, SortKey};
use std::cmp::Ordering;

/// Return `runs` ordered by `key` in `direction`.
///
/// The input is left untouched. With no key the original order is kept.
/// The sort is stable, so runs with equal values keep their relative order.
pub fn sort_runs(
    runs: &[PipelineRun],
    key: Option<SortKey>,
    direction: SortDirection,
) -> Vec<&PipelineRun> {
    let mut sorted: Vec<&PipelineRun> = runs.iter().collect();
    if let Some(key) = key {
        sorted.sort_by(|a, b| compare_runs(a, b, key, direction));
    }
    sorted
}

fn compare_runs(
    a: &PipelineRun,
    b: &PipelineRun,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    match (sort_value(a, key), sort_value(b, key)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ord = x.compare(&y);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

/// Comparable projection of one column.
enum SortValue<'a> {
    Text(&'a str),
    Time(NaiveDateTime),
    Count(u64),
    Ratio(f64),
    Flag(bool),
}

impl SortValue<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => locale_compare(a, b),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            (SortValue::Count(a), SortValue::Count(b)) => a.cmp(b),
            (SortValue::Ratio(a), SortValue::Ratio(b)) => a.total_cmp(b),
            (SortValue::Flag(a), SortValue::Flag(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

fn sort_value(run: &PipelineRun, key: SortKey) -> Option<SortValue<'_>> {
    match key {
        SortKey::Name => Some(SortValue::Text(&run.name)),
        SortKey::Status => Some(SortValue::Text(run.status.label())),
        SortKey::StartTime => Some(SortValue::Time(run.start_time)),
        SortKey::EndTime => run.end_time.map(SortValue::Time),
        SortKey::Duration => run.duration_ms.map(SortValue::Count),
        SortKey::SlaMet => run.sla_outcome().map(SortValue::Flag),
        SortKey::TotalRows => Some(SortValue::Count(run.total_rows)),
        SortKey::ProcessedRows => Some(SortValue::Count(run.processed_rows)),
        SortKey::FilteredPercent => run.filtered_percent().map(SortValue::Ratio),
    }
}

/// Approximates locale order for names: case-insensitive first, and
/// lowercase before uppercase when the strings differ only by case.
/// Accents are not folded, so `é` sorts after `z`.
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use df_protocol::RunStatus;

    fn start(hour: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap().and_hms_opt(0, 0, 0).unwrap()
            + Duration::hours(hour)
    }

    fn finished(name: &str, hour: i64, duration_ms: u64, total: u64) -> PipelineRun {
        PipelineRun {
            name: name.to_string(),
            status: RunStatus::Succeeded,
            start_time: start(hour),
            end_time: Some(start(hour) + Duration::milliseconds(duration_ms as i64)),
            duration_ms: Some(duration_ms),
            sla_met: duration_ms < 5_400_000,
            total_rows: total,
            processed_rows: total / 2,
        }
    }

    fn running(name: &str, hour: i64, total: u64) -> PipelineRun {
        PipelineRun {
            name: name.to_string(),
            status: RunStatus::Running,
            start_time: start(hour),
            end_time: None,
            duration_ms: None,
            sla_met: false,
            total_rows: total,
            processed_rows: total,
        }
    }

    fn names(runs: &[&PipelineRun]) -> Vec<String> {
        runs.iter().map(|r| r.name.clone()).collect()
    }

    fn sample() -> Vec<PipelineRun> {
        vec![
            finished("Pipeline 003", 12, 7_000_000, 300),
            running("Pipeline 001", 9, 100),
            finished("Pipeline 002", 10, 1_000, 200),
            running("Pipeline 005", 15, 500),
            finished("Pipeline 004", 11, 60_000, 400),
        ]
    }

    #[test]
    fn test_no_key_keeps_order() {
        let runs = sample();
        let sorted = sort_runs(&runs, None, SortDirection::Descending);
        assert_eq!(
            names(&sorted),
            vec!["Pipeline 003", "Pipeline 001", "Pipeline 002", "Pipeline 005", "Pipeline 004"]
        );
    }

    #[test]
    fn test_name_ascending_and_descending() {
        let runs = sample();
        let asc = sort_runs(&runs, Some(SortKey::Name), SortDirection::Ascending);
        assert_eq!(
            names(&asc),
            vec!["Pipeline 001", "Pipeline 002", "Pipeline 003", "Pipeline 004", "Pipeline 005"]
        );

        let desc = sort_runs(&runs, Some(SortKey::Name), SortDirection::Descending);
        assert_eq!(
            names(&desc),
            vec!["Pipeline 005", "Pipeline 004", "Pipeline 003", "Pipeline 002", "Pipeline 001"]
        );
    }

    #[test]
    fn test_duration_sorts_numerically_with_running_last() {
        let runs = sample();

        let asc = sort_runs(&runs, Some(SortKey::Duration), SortDirection::Ascending);
        assert_eq!(
            names(&asc),
            vec!["Pipeline 002", "Pipeline 004", "Pipeline 003", "Pipeline 001", "Pipeline 005"]
        );

        let desc = sort_runs(&runs, Some(SortKey::Duration), SortDirection::Descending);
        assert_eq!(
            names(&desc),
            vec!["Pipeline 003", "Pipeline 004", "Pipeline 002", "Pipeline 001", "Pipeline 005"]
        );
    }

    #[test]
    fn test_end_time_and_sla_put_running_last() {
        let runs = sample();
        for key in [SortKey::EndTime, SortKey::SlaMet] {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let sorted = sort_runs(&runs, Some(key), direction);
                assert!(sorted[..3].iter().all(|r| r.status.is_finished()));
                assert!(sorted[3..].iter().all(|r| r.status == RunStatus::Running));
            }
        }
    }

    #[test]
    fn test_sla_compares_as_boolean() {
        let runs = sample();
        let asc = sort_runs(&runs, Some(SortKey::SlaMet), SortDirection::Ascending);
        assert!(!asc[0].sla_met);
        assert!(asc[1].sla_met && asc[2].sla_met);
    }

    #[test]
    fn test_numeric_sort_is_idempotent() {
        let runs = sample();
        let once: Vec<PipelineRun> =
            sort_runs(&runs, Some(SortKey::TotalRows), SortDirection::Descending)
                .into_iter()
                .cloned()
                .collect();
        let twice = sort_runs(&once, Some(SortKey::TotalRows), SortDirection::Descending);
        assert_eq!(names(&twice), once.iter().map(|r| r.name.clone()).collect::<Vec<_>>());
        let totals: Vec<u64> = twice.iter().map(|r| r.total_rows).collect();
        assert_eq!(totals, vec![500, 400, 300, 200, 100]);
    }

    #[test]
    fn test_status_sorts_by_label() {
        let runs = sample();
        let asc = sort_runs(&runs, Some(SortKey::Status), SortDirection::Ascending);
        assert_eq!(asc[0].status, RunStatus::Running);
        assert_eq!(asc[4].status, RunStatus::Succeeded);
    }

    #[test]
    fn test_start_time_is_chronological() {
        let runs = sample();
        let asc = sort_runs(&runs, Some(SortKey::StartTime), SortDirection::Ascending);
        let hours: Vec<_> = asc.iter().map(|r| r.start_time).collect();
        let mut expected = hours.clone();
        expected.sort();
        assert_eq!(hours, expected);
    }

    #[test]
    fn test_input_is_not_modified() {
        let runs = sample();
        let before = runs.clone();
        let _ = sort_runs(&runs, Some(SortKey::Duration), SortDirection::Ascending);
        assert_eq!(runs, before);
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("alpha", "Beta"), Ordering::Less);
        assert_eq!(locale_compare("Beta", "alpha"), Ordering::Greater);
        assert_ne!(locale_compare("a", "A"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_puts_lowercase_first_on_case_ties() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Pipeline", "pipeline"), Ordering::Greater);
        assert_eq!(locale_compare("pipeline", "pipeline"), Ordering::Equal);
    }
}
