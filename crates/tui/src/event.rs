//! Event handling types for the TUI.
//!
//! Key presses are first mapped to an [`Action`]; slash commands typed into
//! the composer are parsed into a [`Command`]. Both are then applied to the
//! dashboard state by `event_handler`.

use chrono::NaiveDate;
use df_protocol::{SortDirection, SortKey, Theme};

/// Status of an event after being handled by a widget.
///
/// Widgets return this enum from their `handle_key_event` methods to indicate
/// whether the event was consumed or should be passed to the next handler in
/// the chain of responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The event was handled by the widget and should not be propagated further.
    Consumed,
    /// The event was not handled by the widget and should be passed to the next handler.
    NotConsumed,
}

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Sort by a column, flipping the direction if it is already active.
    Sort(SortKey),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Move the selected date by a number of days.
    ShiftDate(i64),
    ToggleTheme,
    OpenComposer,
    Quit,
}

/// A parsed slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/date YYYY-MM-DD`
    SetDate(NaiveDate),
    /// `/today`
    Today,
    /// `/page N`
    Page(usize),
    /// `/sort <key> [asc|desc]`. Without a direction the key is toggled.
    Sort(SortKey, Option<SortDirection>),
    /// `/theme [light|dark]`. Without an argument the theme is toggled.
    Theme(Option<Theme>),
    /// `/quit`
    Quit,
}
