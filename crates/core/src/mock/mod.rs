//! Synthetic data generation.
//!
//! Every generator takes the random source as a parameter so callers can
//! supply a seeded generator and get reproducible data.

pub mod daily;
pub mod runs;

pub use daily::{generate_daily_summary, previous_business_day};
pub use runs::{generate_runs, DEFAULT_RUN_COUNT, DEFAULT_SLA_THRESHOLD_MS};
