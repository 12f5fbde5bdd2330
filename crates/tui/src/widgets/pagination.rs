//! Page-link bar under the run table.

use crate::palette::Palette;
use df_core::view::{PageInfo, PageItem};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Build the bar: `‹ Previous  1 … 4 [5] 6 … 15  Next ›`.
///
/// Disabled links and ellipses are dimmed; the current page is bracketed.
pub fn pagination_line(info: PageInfo, palette: &Palette) -> Line<'static> {
    let enabled = Style::default().fg(palette.accent);
    let disabled = palette.muted_style();

    let mut spans = vec![Span::styled(
        "‹ Previous",
        if info.has_previous() { enabled } else { disabled },
    )];

    for item in info.window() {
        spans.push(Span::raw(" "));
        match item {
            PageItem::Page(page) if page == info.current => spans.push(Span::styled(
                format!("[{page}]"),
                Style::default()
                    .fg(palette.background)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            PageItem::Page(page) => {
                spans.push(Span::styled(page.to_string(), Style::default().fg(palette.text)))
            }
            PageItem::Ellipsis => spans.push(Span::styled("…", disabled)),
        }
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "Next ›",
        if info.has_next() { enabled } else { disabled },
    ));

    Line::from(spans)
}

/// Render the bar right-aligned in `area`.
pub fn render_pagination(frame: &mut Frame, area: Rect, info: PageInfo, palette: &Palette) {
    let paragraph = Paragraph::new(pagination_line(info, palette))
        .alignment(Alignment::Right)
        .style(palette.base());
    frame.render_widget(paragraph, area);
}
