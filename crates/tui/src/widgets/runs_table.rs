//! Run table widget.
//!
//! Shows one page of pipeline runs. Each header carries the digit that sorts
//! by it, and the active sort column carries a direction arrow.

use crate::palette::Palette;
use df_core::format::{
    format_count, format_duration, format_optional_timestamp, format_percent, format_timestamp,
    NOT_APPLICABLE,
};
use df_protocol::{PipelineRun, SortDirection, SortKey};
use ratatui::layout::Constraint;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Cell;
use ratatui::widgets::Row;
use ratatui::widgets::Table;
use ratatui::Frame;

const COLUMN_WIDTHS: [u16; 9] = [17, 12, 20, 20, 13, 9, 14, 18, 14];

/// Header text for `key`, e.g. `5 Duration ▲`.
pub fn header_label(key: SortKey, sort: Option<(SortKey, SortDirection)>) -> String {
    let arrow = match sort {
        Some((active, SortDirection::Ascending)) if active == key => " ▲",
        Some((active, SortDirection::Descending)) if active == key => " ▼",
        _ => "",
    };
    format!("{} {}{arrow}", key.column(), key.title())
}

fn na_cell<'a>(text: String, palette: &Palette) -> Cell<'a> {
    if text == NOT_APPLICABLE {
        Cell::from(text).style(palette.muted_style())
    } else {
        Cell::from(text)
    }
}

fn sla_cell<'a>(run: &PipelineRun, palette: &Palette) -> Cell<'a> {
    match run.sla_outcome() {
        Some(true) => Cell::from("Met").style(Style::default().fg(palette.positive)),
        Some(false) => Cell::from("Violated").style(Style::default().fg(palette.negative)),
        None => Cell::from(NOT_APPLICABLE).style(palette.muted_style()),
    }
}

fn run_row<'a>(run: &PipelineRun, palette: &Palette) -> Row<'a> {
    Row::new(vec![
        Cell::from(run.name.clone()),
        Cell::from(run.status.label()).style(palette.status_style(run.status)),
        Cell::from(format_timestamp(run.start_time)),
        na_cell(format_optional_timestamp(run.end_time), palette),
        na_cell(format_duration(run.duration_ms), palette),
        sla_cell(run, palette),
        Cell::from(format_count(run.total_rows)),
        Cell::from(format_count(run.processed_rows)),
        na_cell(format_percent(run.filtered_percent()), palette),
    ])
}

/// Renders one page of runs.
///
/// # Arguments
/// * `frame` - The frame to render into
/// * `area` - The area to render the table in
/// * `runs` - Runs on the current page, already sorted
/// * `sort` - Active sort key and direction, if any
/// * `palette` - Colours of the active theme
pub fn render_runs_table(
    frame: &mut Frame,
    area: Rect,
    runs: &[&PipelineRun],
    sort: Option<(SortKey, SortDirection)>,
    palette: &Palette,
) {
    let rows: Vec<Row> = runs.iter().map(|run| run_row(run, palette)).collect();

    let header = Row::new(
        SortKey::ALL
            .iter()
            .map(|key| Cell::from(header_label(*key, sort))),
    )
    .style(palette.header_style());

    let widths = COLUMN_WIDTHS.map(Constraint::Length);

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title("Pipeline Runs")
            .style(palette.base()),
    );

    frame.render_widget(table, area);
}
