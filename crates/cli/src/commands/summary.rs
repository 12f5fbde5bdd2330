//! `dataflow-dash summary`: print the daily row processing summary.

use super::{build_state, load};
use crate::logging::init_stderr_logging;
use crate::DataOptions;
use color_eyre::Result;
use colored::Colorize;
use df_core::format::format_day_label;
use df_core::state::MemoryStore;
use df_core::view::ComparisonRow;
use serde_json::json;
use std::path::Path;

pub fn run(root: &Path, data: &DataOptions, json: bool) -> Result<()> {
    let config = load(root)?;
    init_stderr_logging(&config.dashboard.log_level)?;

    let state = build_state(&config, data, Box::new(MemoryStore::new()));
    let rows = state.comparison();

    if json {
        let output = json!({
            "date": state.selected_date(),
            "previousDate": rows.first().map(|row| row.previous_date),
            "sources": rows,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_table(&rows);
    }
    Ok(())
}

fn print_table(rows: &[ComparisonRow]) {
    let Some(first) = rows.first() else {
        return;
    };

    println!("{}", "Daily Row Processing Summary".bold());
    println!(
        "{}",
        format!(
            "{:<18} {:<18} {:<18} {:<14} {}",
            "Source System",
            format_day_label(first.current_date),
            format_day_label(first.previous_date),
            "Difference",
            "% Difference",
        )
        .bold()
    );

    for row in rows {
        let change = |text: String| {
            if row.is_increase() {
                text.green()
            } else {
                text.red()
            }
        };
        println!(
            "{:<18} {:<18} {:<18} {} {}",
            row.source_system.display_name(),
            row.current_label(),
            row.previous_label(),
            change(format!("{:<14}", row.difference_label())),
            change(row.percent_label()),
        );
    }
}
