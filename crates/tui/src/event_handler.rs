//! Event handling utilities for the TUI.
//!
//! This module translates user input into state transitions:
//! - Key presses into [`Action`]s (`map_key`)
//! - Actions onto the dashboard state (`apply_action`)
//! - Parsed slash commands onto the dashboard state (`apply_command`)

use crate::event::{Action, Command, EventStatus};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use df_core::state::DashboardState;
use df_protocol::SortKey;
use rand::Rng;
use tracing::debug;

/// Map a key press on the main screen to an action.
///
/// Releases and repeats are ignored, as are unbound keys.
pub fn map_key(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c @ '1'..='9') => {
            let column = c.to_digit(10).map_or(0, |d| d as usize);
            Action::Sort(SortKey::from_column(column)?)
        }
        KeyCode::Left | KeyCode::Char('h') => Action::PreviousPage,
        KeyCode::Right | KeyCode::Char('l') => Action::NextPage,
        KeyCode::Home => Action::FirstPage,
        KeyCode::End => Action::LastPage,
        KeyCode::Char('[') => Action::ShiftDate(-1),
        KeyCode::Char(']') => Action::ShiftDate(1),
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('/') => Action::OpenComposer,
        _ => return None,
    };

    Some(action)
}

/// Apply an action to the dashboard.
///
/// Returns `NotConsumed` for actions the state does not own (quitting and
/// opening the composer), leaving them to the caller.
pub fn apply_action<R: Rng>(state: &mut DashboardState<R>, action: Action) -> EventStatus {
    debug!(?action, "applying action");
    match action {
        Action::Sort(key) => state.toggle_sort(key),
        Action::NextPage => state.next_page(),
        Action::PreviousPage => state.previous_page(),
        Action::FirstPage => state.first_page(),
        Action::LastPage => state.last_page(),
        Action::ShiftDate(days) => state.shift_date(days),
        Action::ToggleTheme => state.toggle_theme(),
        Action::OpenComposer | Action::Quit => return EventStatus::NotConsumed,
    }
    EventStatus::Consumed
}

/// Apply a parsed slash command to the dashboard.
///
/// `today` is the date `/today` jumps to. `Quit` is left to the caller.
pub fn apply_command<R: Rng>(
    state: &mut DashboardState<R>,
    command: Command,
    today: NaiveDate,
) -> EventStatus {
    debug!(?command, "applying command");
    match command {
        Command::SetDate(date) => state.set_selected_date(date),
        Command::Today => state.set_selected_date(today),
        Command::Page(page) => state.set_page(page),
        Command::Sort(key, None) => state.toggle_sort(key),
        Command::Sort(key, Some(direction)) => state.set_sort(Some(key), direction),
        Command::Theme(None) => state.toggle_theme(),
        Command::Theme(Some(theme)) => state.set_theme(theme),
        Command::Quit => return EventStatus::NotConsumed,
    }
    EventStatus::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use df_core::state::MemoryStore;
    use df_protocol::{DashboardConfig, SortDirection, Theme};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state() -> DashboardState {
        DashboardState::new(
            &DashboardConfig::default(),
            ymd(2024, 5, 6),
            Box::new(MemoryStore::new()),
            StdRng::seed_from_u64(5),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_digit_keys_sort_by_column() {
        assert_eq!(
            map_key(key(KeyCode::Char('1'))),
            Some(Action::Sort(SortKey::Name))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('5'))),
            Some(Action::Sort(SortKey::Duration))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('9'))),
            Some(Action::Sort(SortKey::FilteredPercent))
        );
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Left)), Some(Action::PreviousPage));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::NextPage));
        assert_eq!(map_key(key(KeyCode::End)), Some(Action::LastPage));
        assert_eq!(map_key(key(KeyCode::Char('['))), Some(Action::ShiftDate(-1)));
        assert_eq!(map_key(key(KeyCode::Char('/'))), Some(Action::OpenComposer));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_apply_action_navigates_pages() {
        let mut state = state();
        assert_eq!(apply_action(&mut state, Action::NextPage), EventStatus::Consumed);
        assert_eq!(state.current_page(), 2);

        apply_action(&mut state, Action::LastPage);
        assert_eq!(state.current_page(), 15);

        apply_action(&mut state, Action::FirstPage);
        apply_action(&mut state, Action::PreviousPage);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_apply_action_leaves_quit_to_caller() {
        let mut state = state();
        assert_eq!(apply_action(&mut state, Action::Quit), EventStatus::NotConsumed);
        assert_eq!(
            apply_action(&mut state, Action::OpenComposer),
            EventStatus::NotConsumed
        );
    }

    #[test]
    fn test_shift_date_resets_page() {
        let mut state = state();
        state.set_page(6);
        apply_action(&mut state, Action::ShiftDate(1));
        assert_eq!(state.selected_date(), ymd(2024, 5, 7));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_apply_sort_commands() {
        let mut state = state();

        apply_command(
            &mut state,
            Command::Sort(SortKey::TotalRows, Some(SortDirection::Descending)),
            ymd(2024, 5, 6),
        );
        assert_eq!(state.sort_key(), Some(SortKey::TotalRows));
        assert_eq!(state.sort_direction(), SortDirection::Descending);

        apply_command(&mut state, Command::Sort(SortKey::TotalRows, None), ymd(2024, 5, 6));
        assert_eq!(state.sort_direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_apply_date_and_today_commands() {
        let mut state = state();
        apply_command(&mut state, Command::SetDate(ymd(2024, 1, 2)), ymd(2024, 5, 6));
        assert_eq!(state.selected_date(), ymd(2024, 1, 2));

        apply_command(&mut state, Command::Today, ymd(2024, 5, 9));
        assert_eq!(state.selected_date(), ymd(2024, 5, 9));
    }

    #[test]
    fn test_apply_theme_and_page_commands() {
        let mut state = state();
        apply_command(&mut state, Command::Theme(Some(Theme::Light)), ymd(2024, 5, 6));
        assert_eq!(state.theme(), Theme::Light);

        apply_command(&mut state, Command::Theme(None), ymd(2024, 5, 6));
        assert_eq!(state.theme(), Theme::Dark);

        apply_command(&mut state, Command::Page(40), ymd(2024, 5, 6));
        assert_eq!(state.current_page(), 15);

        assert_eq!(
            apply_command(&mut state, Command::Quit, ymd(2024, 5, 6)),
            EventStatus::NotConsumed
        );
    }
}
