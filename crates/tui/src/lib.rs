//! # df-tui
//!
//! Terminal User Interface for dataflow-dash.
//!
//! This crate renders a [`DashboardState`] with ratatui and maps key
//! presses and slash commands onto its transitions.

pub mod app;
pub mod event;
pub mod event_handler;
pub mod palette;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;

use df_core::state::DashboardState;
use tracing::info;

/// Run the dashboard until the user quits.
///
/// Puts the terminal into raw mode on the alternate screen and restores it
/// on return, including when the event loop fails.
pub async fn run_app(state: DashboardState) -> anyhow::Result<()> {
    let mut tui = Tui::init()?;
    let mut app = App::new(state);

    info!(date = %app.state.selected_date(), "dashboard started");
    let result = app.run(&mut tui).await;

    tui.restore()?;
    info!("dashboard stopped");
    result
}
