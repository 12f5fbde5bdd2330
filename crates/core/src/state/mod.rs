//! Dashboard session state.
//!
//! - [`dashboard`]: the view state and its named transitions
//! - [`store`]: key-value preference storage
//! - [`theme`]: reading and writing the theme preference

pub mod dashboard;
pub mod store;
pub mod theme;

pub use dashboard::DashboardState;
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, StoreResult};
pub use theme::{load_theme, save_theme, THEME_KEY};
