//! TUI application state and event loop.
//!
//! `App` wraps the dashboard state together with the UI-only state (the
//! command composer and the status line) and renders the whole screen.

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use df_core::format::format_count;
use df_core::state::DashboardState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio_stream::StreamExt;
use tracing::warn;

use crate::event::{Action, Command, EventStatus};
use crate::event_handler::{apply_action, apply_command, map_key};
use crate::palette::Palette;
use crate::tui::{Tui, TuiEvent};
use crate::widgets::pagination::render_pagination;
use crate::widgets::runs_table::render_runs_table;
use crate::widgets::summary_table::render_summary_table;
use crate::widgets::CommandComposer;

const HEADER_HEIGHT: u16 = 3;
const SUMMARY_HEIGHT: u16 = 8;
const FOOTER_HEIGHT: u16 = 3;
const POPUP_HEIGHT: u16 = 8;

/// Main TUI application state.
pub struct App {
    pub state: DashboardState,
    composer: CommandComposer,
    composer_open: bool,
    /// Last command error, shown in the footer until the next key press.
    status: Option<String>,
    pub should_exit: bool,
}

impl App {
    pub fn new(state: DashboardState) -> Self {
        Self {
            state,
            composer: CommandComposer::new(),
            composer_open: false,
            status: None,
            should_exit: false,
        }
    }

    pub fn composer_open(&self) -> bool {
        self.composer_open
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Main event loop. Returns when the user quits or input ends.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();
        let frames = tui.frame_requester();

        frames.schedule_frame();

        while !self.should_exit {
            let Some(event) = tui_events.next().await else {
                break;
            };

            match event {
                TuiEvent::Key(key_event) => {
                    self.handle_key_event(key_event);
                    frames.schedule_frame();
                }
                TuiEvent::Paste(text) => {
                    if self.composer_open {
                        self.composer.insert_str(&text);
                        frames.schedule_frame();
                    }
                }
                TuiEvent::Draw => tui.draw(|frame| self.render(frame))?,
            }
        }

        Ok(())
    }

    /// Route a key press to the composer when it is open, else to the
    /// dashboard key bindings.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }

        if self.composer_open {
            self.handle_composer_key(key_event);
            return;
        }

        self.status = None;
        let Some(action) = map_key(key_event) else {
            return;
        };

        if apply_action(&mut self.state, action) == EventStatus::NotConsumed {
            match action {
                Action::Quit => self.should_exit = true,
                Action::OpenComposer => {
                    self.composer_open = true;
                    self.composer.clear();
                    self.composer.insert_char('/');
                }
                _ => {}
            }
        }
    }

    fn handle_composer_key(&mut self, key_event: KeyEvent) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_exit = true;
            return;
        }

        if self.composer.handle_key_event(key_event) == EventStatus::Consumed {
            return;
        }

        match key_event.code {
            KeyCode::Esc => self.close_composer(),
            KeyCode::Enter => {
                let parsed = self.composer.parse_command();
                self.close_composer();
                match parsed {
                    Ok(Some(command)) => self.run_command(command),
                    Ok(None) => {}
                    Err(message) => {
                        warn!(%message, "rejected command");
                        self.status = Some(message);
                    }
                }
            }
            _ => {}
        }
    }

    fn close_composer(&mut self) {
        self.composer_open = false;
        self.composer.clear();
    }

    fn run_command(&mut self, command: Command) {
        let today = Utc::now().date_naive();
        if apply_command(&mut self.state, command, today) == EventStatus::NotConsumed
            && command == Command::Quit
        {
            self.should_exit = true;
        }
    }

    /// Render the whole screen.
    pub fn render(&self, frame: &mut Frame) {
        let palette = Palette::for_theme(self.state.theme());
        let area = frame.area();

        frame.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(SUMMARY_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.render_header(frame, chunks[0], &palette);

        let sort = self
            .state
            .sort_key()
            .map(|key| (key, self.state.sort_direction()));
        render_runs_table(frame, chunks[1], &self.state.page_runs(), sort, &palette);
        render_pagination(frame, chunks[2], self.state.page_info(), &palette);
        render_summary_table(frame, chunks[3], &self.state.comparison(), &palette);

        if self.composer_open {
            self.composer.render(chunks[4], frame.buffer_mut(), &palette);
            let popup = popup_area(chunks[4], area);
            self.composer.render_popup(popup, frame.buffer_mut(), &palette);
        } else {
            self.render_footer(frame, chunks[4], &palette);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let theme_label = format!("{} theme", self.state.theme());
        let line = Line::from(vec![
            Span::styled(
                "Dataflow Dashboard",
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                self.state.selected_date().format("%Y-%m-%d").to_string(),
                Style::default().fg(palette.accent),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{} runs", format_count(self.state.runs().len() as u64)),
                palette.muted_style(),
            ),
            Span::raw("   "),
            Span::styled(theme_label, palette.muted_style()),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(palette.base());
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let line = match &self.status {
            Some(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(palette.negative),
            )),
            None => Line::from(Span::styled(
                "1-9 sort  ←/→ page  Home/End  [/] day  t theme  / command  q quit",
                palette.muted_style(),
            )),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(palette.base());
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

/// Area just above the composer for the suggestion popup.
fn popup_area(composer: Rect, screen: Rect) -> Rect {
    let height = POPUP_HEIGHT.min(composer.y.saturating_sub(screen.y));
    Rect {
        x: composer.x,
        y: composer.y.saturating_sub(height),
        width: composer.width.min(60),
        height,
    }
}
