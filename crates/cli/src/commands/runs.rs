//! `dataflow-dash runs`: print one page of the run table.

use super::{build_state, load};
use crate::logging::init_stderr_logging;
use crate::DataOptions;
use color_eyre::Result;
use colored::{ColoredString, Colorize};
use df_core::format::{
    format_count, format_duration, format_optional_timestamp, format_percent, format_timestamp,
    NOT_APPLICABLE,
};
use df_core::state::{DashboardState, MemoryStore};
use df_protocol::{PipelineRun, RunStatus, SortDirection, SortKey};
use serde_json::json;
use std::path::Path;
use tracing::warn;

const COLUMN_WIDTHS: [usize; 9] = [14, 11, 21, 21, 12, 10, 12, 16, 10];

pub struct RunsOptions {
    pub page: usize,
    pub sort: Option<SortKey>,
    pub desc: bool,
    pub json: bool,
}

pub fn run(root: &Path, data: &DataOptions, options: &RunsOptions) -> Result<()> {
    let config = load(root)?;
    init_stderr_logging(&config.dashboard.log_level)?;

    let mut state = build_state(&config, data, Box::new(MemoryStore::new()));
    let direction = if options.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    state.set_sort(options.sort, direction);
    state.set_page(options.page);
    if state.current_page() != options.page {
        warn!(
            requested = options.page,
            shown = state.current_page(),
            "page out of range"
        );
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&runs_json(&state))?);
    } else {
        print_table(&state);
    }
    Ok(())
}

fn runs_json(state: &DashboardState) -> serde_json::Value {
    let sort = state
        .sort_key()
        .map(|key| json!({ "key": key, "direction": state.sort_direction() }));

    json!({
        "date": state.selected_date(),
        "page": state.current_page(),
        "pageCount": state.page_count(),
        "pageSize": state.page_size(),
        "totalRuns": state.runs().len(),
        "sort": sort,
        "runs": state.page_runs(),
    })
}

fn pad(text: &str, column: usize) -> String {
    format!("{text:<width$}", width = COLUMN_WIDTHS[column])
}

fn status_cell(status: RunStatus, column: usize) -> ColoredString {
    let text = pad(status.label(), column);
    match status {
        RunStatus::Running => text.blue(),
        RunStatus::Succeeded => text.green(),
        RunStatus::Failed => text.red(),
    }
}

fn sla_cell(run: &PipelineRun, column: usize) -> ColoredString {
    match run.sla_outcome() {
        Some(true) => pad("Met", column).green(),
        Some(false) => pad("Violated", column).red(),
        None => pad(NOT_APPLICABLE, column).dimmed(),
    }
}

fn print_table(state: &DashboardState) {
    let sort = match state.sort_key() {
        Some(key) => format!(", sorted by {key} {}", state.sort_direction().as_str()),
        None => String::new(),
    };
    println!(
        "{} {} (page {} of {}{sort})",
        "Pipeline runs for".bold(),
        state.selected_date(),
        state.current_page(),
        state.page_count(),
    );

    let header: String = SortKey::ALL
        .iter()
        .enumerate()
        .map(|(i, key)| pad(key.title(), i))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", header.bold());

    for run in state.page_runs() {
        println!(
            "{} {} {} {} {} {} {} {} {}",
            pad(&run.name, 0),
            status_cell(run.status, 1),
            pad(&format_timestamp(run.start_time), 2),
            pad(&format_optional_timestamp(run.end_time), 3),
            pad(&format_duration(run.duration_ms), 4),
            sla_cell(run, 5),
            pad(&format_count(run.total_rows), 6),
            pad(&format_count(run.processed_rows), 7),
            format_percent(run.filtered_percent()),
        );
    }
}
