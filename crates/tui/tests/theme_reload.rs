//! The theme chosen in one session is the theme of the next.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use df_core::state::{DashboardState, FileStore};
use df_protocol::{DashboardConfig, Theme};
use df_tui::palette::Palette;
use df_tui::App;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::Path;

fn open_app(state_file: &Path) -> App {
    let store = FileStore::open(state_file).unwrap();
    let state = DashboardState::new(
        &DashboardConfig::default(),
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
        Box::new(store),
        StdRng::seed_from_u64(99),
    );
    App::new(state)
}

#[test]
fn test_theme_key_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join(".dataflow-dash").join("state.json");

    let mut first = open_app(&state_file);
    assert_eq!(first.state.theme(), Theme::Dark);
    first.handle_key_event(KeyEvent::from(KeyCode::Char('t')));
    assert_eq!(first.state.theme(), Theme::Light);
    drop(first);

    let second = open_app(&state_file);
    assert_eq!(second.state.theme(), Theme::Light);

    let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
    terminal.draw(|frame| second.render(frame)).unwrap();
    assert_eq!(
        terminal.backend().buffer()[(0, 0)].bg,
        Palette::LIGHT.background
    );
}

#[test]
fn test_theme_command_persists() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    let mut app = open_app(&state_file);
    for c in "/theme light".chars() {
        app.handle_key_event(KeyEvent::from(KeyCode::Char(c)));
    }
    app.handle_key_event(KeyEvent::from(KeyCode::Enter));

    let content = std::fs::read_to_string(&state_file).unwrap();
    assert!(content.contains("\"theme\": \"light\""));
}
