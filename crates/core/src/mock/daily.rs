//! Mock daily ingestion counts per source system.

use chrono::{Datelike, NaiveDate, Weekday};
use df_protocol::{DailySourceSummary, DayCount, SourceSystem};
use rand::Rng;

/// Nearest business day strictly before `date`, skipping weekends.
pub fn previous_business_day(date: NaiveDate) -> NaiveDate {
    let mut day = date;
    loop {
        day = day.pred_opt().unwrap_or(NaiveDate::MIN);
        if day == NaiveDate::MIN || !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            return day;
        }
    }
}

/// Generate one summary per [`SourceSystem`] for `date` and its previous
/// business day.
pub fn generate_daily_summary<R: Rng + ?Sized>(
    rng: &mut R,
    date: NaiveDate,
) -> Vec<DailySourceSummary> {
    let previous_date = previous_business_day(date);

    SourceSystem::ALL
        .iter()
        .map(|&source| {
            let (current, previous) = counts_for(rng, source);
            DailySourceSummary {
                source_system: source,
                current_day: DayCount {
                    date,
                    count: current,
                },
                previous_day: DayCount {
                    date: previous_date,
                    count: previous,
                },
            }
        })
        .collect()
}

/// Each source has its own volume band and day-over-day drift.
fn counts_for<R: Rng + ?Sized>(rng: &mut R, source: SourceSystem) -> (u64, u64) {
    let (current, previous): (i64, i64) = match source {
        SourceSystem::SalesforceCrm => {
            let current = rng.gen_range(15_000_000..20_000_000);
            (current, current - rng.gen_range(0..2_000_000) + 500_000)
        }
        SourceSystem::SapEcc => {
            let current = rng.gen_range(3_000_000..3_200_000);
            (current, current - rng.gen_range(0..100_000) + 20_000)
        }
        SourceSystem::GoogleAnalytics => {
            let current = rng.gen_range(5_000_000..15_000_000);
            (current, current + rng.gen_range(0..1_000_000) - 500_000)
        }
        SourceSystem::CustomDatabase => {
            let current = rng.gen_range(500_000..1_500_000);
            (current, current + rng.gen_range(0..500_000) - 100_000)
        }
    };

    (current.max(0) as u64, previous.max(0) as u64)
}
