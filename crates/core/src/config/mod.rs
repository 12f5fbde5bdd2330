//! Configuration loading and management.
//!
//! This module loads `.dataflow-dash/config.toml` and resolves the paths of
//! the other files kept in the data directory.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, DATA_DIR_NAME};
pub use models::AppConfig;
