//! TUI widgets module.
//!
//! Each widget renders one region of the dashboard from borrowed view data
//! and the active [`Palette`](crate::palette::Palette).

pub mod command_composer;
pub mod pagination;
pub mod runs_table;
pub mod summary_table;

pub use command_composer::CommandComposer;
