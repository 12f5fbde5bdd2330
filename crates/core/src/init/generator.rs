//! Writes the default `config.toml` into a new data directory.

use super::error::{InitError, InitResult};
use super::templates::get_template;
use crate::config::DATA_DIR_NAME;
use std::fs;
use std::path::PathBuf;
use tracing::info;

const CONFIG_TEMPLATE: &str = "config.toml";

/// Options for initializing a `.dataflow-dash` directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory in which `.dataflow-dash/` is created.
    pub target_dir: PathBuf,

    /// Overwrite an existing `config.toml`.
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
        }
    }
}

/// Create `.dataflow-dash/config.toml` from the embedded template.
///
/// Returns the path of the written file.
///
/// # Errors
/// - [`InitError::AlreadyExists`] if the config exists and `force` is unset
/// - [`InitError::TemplateNotFound`] if the template was not embedded
/// - I/O failures while creating the directory or writing the file
pub fn generate_data_dir(options: &InitOptions) -> InitResult<PathBuf> {
    let data_dir = options.target_dir.join(DATA_DIR_NAME);
    let config_path = data_dir.join(CONFIG_TEMPLATE);

    if config_path.exists() && !options.force {
        return Err(InitError::AlreadyExists(config_path));
    }

    let content = get_template(CONFIG_TEMPLATE)
        .ok_or_else(|| InitError::TemplateNotFound(CONFIG_TEMPLATE.to_string()))?;

    fs::create_dir_all(&data_dir).map_err(|source| InitError::DirectoryCreate {
        path: data_dir.clone(),
        source,
    })?;

    fs::write(&config_path, content).map_err(|source| InitError::FileWrite {
        path: config_path.clone(),
        source,
    })?;

    info!(path = %config_path.display(), "wrote default configuration");
    Ok(config_path)
}
