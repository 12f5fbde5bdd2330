//! Command composer widget with slash command autocomplete.
//!
//! Opened with `/` on the main screen. The composer owns the text being
//! typed and the suggestion popup; `Enter` and `Esc` are handled by the app,
//! which calls [`CommandComposer::parse_command`] on submit.

use crate::event::{Command, EventStatus};
use crate::palette::Palette;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use df_protocol::{SortDirection, SortKey, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Available slash commands with their descriptions.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/date <YYYY-MM-DD>", "Show runs for a date"),
    ("/today", "Show runs for today"),
    ("/page <n>", "Jump to a page"),
    ("/sort <key> [asc|desc]", "Sort the run table"),
    ("/theme [light|dark]", "Switch or toggle the theme"),
    ("/quit", "Leave the dashboard"),
];

/// Command composer state.
#[derive(Debug, Clone, Default)]
pub struct CommandComposer {
    input: String,
    /// Cursor position in characters.
    cursor_pos: usize,
    show_popup: bool,
    selected_index: usize,
}

impl CommandComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn should_show_popup(&self) -> bool {
        self.show_popup
    }

    /// Commands whose name starts with the typed word.
    pub fn suggestions(&self) -> Vec<(&'static str, &'static str)> {
        if !self.input.starts_with('/') {
            return Vec::new();
        }

        let typed = self.input.trim();
        COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(typed))
            .copied()
            .collect()
    }

    pub fn selected_suggestion(&self) -> Option<(&'static str, &'static str)> {
        self.suggestions().get(self.selected_index).copied()
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map_or(self.input.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.input.insert(at, c);
        self.cursor_pos += 1;
        self.update_popup_state();
    }

    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_index();
            self.input.remove(at);
            self.update_popup_state();
        }
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
        self.show_popup = false;
        self.selected_index = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.suggestions().len() {
            self.selected_index += 1;
        }
    }

    /// Replace the typed word with the selected command name (Tab key).
    pub fn complete_with_selection(&mut self) {
        if let Some((cmd, _)) = self.selected_suggestion() {
            let name = cmd.split_whitespace().next().unwrap_or(cmd);
            self.input = format!("{name} ");
            self.cursor_pos = self.input.chars().count();
            self.show_popup = false;
            self.selected_index = 0;
        }
    }

    fn update_popup_state(&mut self) {
        self.show_popup = self.input.starts_with('/') && !self.input.contains(' ');

        let count = self.suggestions().len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    /// Handle editing keys. `Enter` and `Esc` are not consumed.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> EventStatus {
        if key_event.kind != KeyEventKind::Press {
            return EventStatus::Consumed;
        }

        match key_event.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Tab => self.complete_with_selection(),
            _ => return EventStatus::NotConsumed,
        }
        EventStatus::Consumed
    }

    /// Render the input line.
    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title("Command (Enter to run, Esc to cancel)")
            .style(palette.base());

        let inner = block.inner(area);
        block.render(area, buf);

        let (before, after) = self.input.split_at(self.byte_index());
        let mut chars = after.chars();
        let under_cursor = chars.next().map_or_else(|| " ".to_string(), String::from);

        let line = Line::from(vec![
            Span::styled("> ", Style::default().fg(palette.accent)),
            Span::raw(before.to_string()),
            Span::styled(
                under_cursor,
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::raw(chars.as_str().to_string()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }

    /// Render the autocomplete popup.
    pub fn render_popup(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if !self.show_popup {
            return;
        }

        let suggestions = self.suggestions();
        if suggestions.is_empty() {
            return;
        }

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title("Suggestions")
            .style(palette.base());

        let inner = block.inner(area);
        block.render(area, buf);

        for (i, (cmd, desc)) in suggestions.iter().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            if offset >= inner.height {
                break;
            }

            let style = if i == self.selected_index {
                Style::default()
                    .fg(palette.background)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };

            let line = Line::from(vec![
                Span::styled(format!("{cmd:<26}"), style),
                Span::styled(desc.to_string(), style.fg(palette.muted)),
            ]);
            buf.set_line(inner.x, inner.y + offset, &line, inner.width);
        }
    }

    /// Parse the current input.
    ///
    /// Returns `Ok(None)` for blank input and `Err` with a message for
    /// anything that is not a valid command.
    pub fn parse_command(&self) -> Result<Option<Command>, String> {
        parse_command(&self.input)
    }
}

/// Parse a slash command line.
pub fn parse_command(input: &str) -> Result<Option<Command>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if !input.starts_with('/') {
        return Err("Invalid command. Commands must start with '/'".to_string());
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let cmd = parts.first().ok_or("Empty command")?;
    let arg = parts.get(1).copied();

    let max_args = match *cmd {
        "/today" | "/quit" | "/q" => 0,
        "/date" | "/page" | "/theme" => 1,
        "/sort" => 2,
        _ => return Err(format!("Unknown command: {cmd}")),
    };
    if let Some(extra) = parts.get(max_args + 1) {
        return Err(format!("Unexpected argument for {cmd}: {extra}"));
    }

    let command = match *cmd {
        "/date" => {
            let value = arg.ok_or("Missing date (YYYY-MM-DD)")?;
            let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map_err(|_| format!("Invalid date: {value} (expected YYYY-MM-DD)"))?;
            Command::SetDate(date)
        }
        "/today" => Command::Today,
        "/page" => {
            let value = arg.ok_or("Missing page number")?;
            let page = value
                .parse::<usize>()
                .ok()
                .filter(|p| *p > 0)
                .ok_or_else(|| format!("Invalid page number: {value}"))?;
            Command::Page(page)
        }
        "/sort" => {
            let key: SortKey = arg.ok_or("Missing sort key")?.parse()?;
            let direction = parts
                .get(2)
                .map(|d| d.parse::<SortDirection>())
                .transpose()?;
            Command::Sort(key, direction)
        }
        "/theme" => Command::Theme(arg.map(str::parse::<Theme>).transpose()?),
        "/quit" | "/q" => Command::Quit,
        _ => return Err(format!("Unknown command: {cmd}")),
    };

    Ok(Some(command))
}
