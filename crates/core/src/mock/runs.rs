//! Mock pipeline run generation.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use df_protocol::{PipelineRun, RunStatus};
use rand::Rng;

/// Runs generated per day unless configured otherwise.
pub const DEFAULT_RUN_COUNT: usize = 150;

/// 1.5 hours.
pub const DEFAULT_SLA_THRESHOLD_MS: u64 = 90 * 60 * 1000;

const MIN_TOTAL_ROWS: u64 = 5_000;
const TOTAL_ROWS_SPAN: u64 = 5_000_000;
const MIN_PROCESSED_FRACTION: f64 = 0.1;
const FIRST_START_HOUR: i64 = 9;
const START_HOUR_SPAN: i64 = 10;
const MAX_RUN_DURATION_MS: u64 = 3 * 60 * 60 * 1000;

/// Generate `count` runs for `date`.
///
/// Runs are named `Pipeline 001`, `Pipeline 002`, … and start on a whole
/// hour between 09:00 and 18:00 of `date`. Finished runs end up to three
/// hours after they start and meet their SLA when the duration is below
/// `sla_threshold_ms`. Running runs have no end time and no duration.
pub fn generate_runs<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    date: NaiveDate,
    sla_threshold_ms: u64,
) -> Vec<PipelineRun> {
    (1..=count)
        .map(|index| generate_run(rng, index, date, sla_threshold_ms))
        .collect()
}

fn generate_run<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    date: NaiveDate,
    sla_threshold_ms: u64,
) -> PipelineRun {
    let status = RunStatus::ALL[rng.gen_range(0..RunStatus::ALL.len())];
    let total_rows = rng.gen_range(MIN_TOTAL_ROWS..MIN_TOTAL_ROWS + TOTAL_ROWS_SPAN);
    let fraction = rng.gen_range(MIN_PROCESSED_FRACTION..1.0);
    let processed_rows = ((total_rows as f64 * fraction) as u64).min(total_rows);

    let start_time = start_of_day(date)
        + Duration::hours(FIRST_START_HOUR + rng.gen_range(0..START_HOUR_SPAN));

    let (end_time, duration_ms, sla_met) = if status.is_finished() {
        let duration_ms = rng.gen_range(0..MAX_RUN_DURATION_MS);
        let end_time = start_time + Duration::milliseconds(duration_ms as i64);
        (Some(end_time), Some(duration_ms), duration_ms < sla_threshold_ms)
    } else {
        (None, None, false)
    };

    PipelineRun {
        name: format!("Pipeline {index:03}"),
        status,
        start_time,
        end_time,
        duration_ms,
        sla_met,
        total_rows,
        processed_rows,
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
