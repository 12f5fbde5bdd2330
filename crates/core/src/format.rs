//! Display formatting for table cells.

use chrono::{NaiveDate, NaiveDateTime};

/// Placeholder for values that do not apply.
pub const NOT_APPLICABLE: &str = "N/A";

/// Format a duration as `1h 2m 3s`, dropping zero parts.
///
/// Sub-second durations render as `0s`; `None` renders as `N/A`.
pub fn format_duration(duration_ms: Option<u64>) -> String {
    let Some(ms) = duration_ms else {
        return NOT_APPLICABLE.to_string();
    };

    let seconds = ms / 1000;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining = seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if remaining > 0 {
        parts.push(format!("{remaining}s"));
    }

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

/// Group digits in threes: `1234567` becomes `1,234,567`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Count with an explicit sign; zero has none.
pub fn format_signed_count(value: i64) -> String {
    let magnitude = format_count(value.unsigned_abs());
    match value.signum() {
        1 => format!("+{magnitude}"),
        -1 => format!("-{magnitude}"),
        _ => magnitude,
    }
}

/// Percentage with two decimals, e.g. `12.50%`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}%"),
        _ => NOT_APPLICABLE.to_string(),
    }
}

/// Percentage with an explicit `+` for positive values.
pub fn format_signed_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => format!("+{v:.2}%"),
        other => format_percent(other),
    }
}

/// `05/06/2024 09:00 AM`.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%m/%d/%Y %I:%M %p").to_string()
}

pub fn format_optional_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map_or_else(|| NOT_APPLICABLE.to_string(), format_timestamp)
}

/// Short column label for a day, e.g. `May 6`.
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
