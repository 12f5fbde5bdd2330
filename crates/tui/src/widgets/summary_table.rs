//! Daily row processing summary widget.

use crate::palette::Palette;
use df_core::format::format_day_label;
use df_core::view::ComparisonRow;
use ratatui::layout::Constraint;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

/// Column headers. The day columns are labelled with their dates when
/// there is at least one row.
pub fn summary_headers(rows: &[ComparisonRow]) -> [String; 5] {
    let (current, previous) = rows.first().map_or_else(
        || ("Current Day".to_string(), "Previous Day".to_string()),
        |row| {
            (
                format_day_label(row.current_date),
                format_day_label(row.previous_date),
            )
        },
    );

    [
        "Source System".to_string(),
        current,
        previous,
        "Difference".to_string(),
        "% Difference".to_string(),
    ]
}

/// Renders the per-source comparison table.
pub fn render_summary_table(
    frame: &mut Frame,
    area: Rect,
    rows: &[ComparisonRow],
    palette: &Palette,
) {
    let header = Row::new(summary_headers(rows)).style(palette.header_style());

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let change = palette.change_style(row.is_increase());
            Row::new(vec![
                Cell::from(row.source_system.display_name()),
                Cell::from(row.current_label()).style(palette.muted_style()),
                Cell::from(row.previous_label()).style(palette.muted_style()),
                Cell::from(row.difference_label()).style(change),
                Cell::from(row.percent_label()).style(change),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Length(14),
    ];

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title("Daily Row Processing Summary")
            .style(palette.base()),
    );

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use df_protocol::SourceSystem;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn row(current: u64, previous: u64) -> ComparisonRow {
        let difference = current as i64 - previous as i64;
        ComparisonRow {
            source_system: SourceSystem::GoogleAnalytics,
            current_date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            current_count: current,
            previous_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            previous_count: previous,
            difference,
            percent_difference: (previous > 0)
                .then(|| difference as f64 / previous as f64 * 100.0),
        }
    }

    #[test]
    fn test_headers_use_dates() {
        let headers = summary_headers(&[row(10, 5)]);
        assert_eq!(headers[1], "May 6");
        assert_eq!(headers[2], "May 3");

        let empty = summary_headers(&[]);
        assert_eq!(empty[1], "Current Day");
        assert_eq!(empty[2], "Previous Day");
    }

    #[test]
    fn test_render_colours_changes() {
        let palette = Palette::DARK;
        let backend = TestBackend::new(100, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let rows = [row(1_200, 1_000), row(900, 1_000)];

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_summary_table(frame, area, &rows, &palette);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let line = |y: u16| -> String {
            (0..buffer.area().width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        };

        let first = line(2);
        assert!(first.contains("Google Analytics"));
        assert!(first.contains("1,200 rows"));
        assert!(first.contains("+200"));
        assert!(first.contains("+20.00%"));

        let second = line(3);
        assert!(second.contains("-100"));
        assert!(second.contains("-10.00%"));

        let column = |text: &str, needle: &str| -> u16 {
            let byte = text.find(needle).unwrap();
            text[..byte].chars().count() as u16
        };
        assert_eq!(buffer[(column(&first, "+200"), 2)].fg, palette.positive);
        assert_eq!(buffer[(column(&second, "-100"), 3)].fg, palette.negative);
    }
}
