//! `dataflow-dash init`: scaffold the configuration.

use crate::logging::init_stderr_logging;
use color_eyre::Result;
use colored::Colorize;
use df_core::init::{generate_data_dir, InitOptions};
use std::path::Path;

pub fn run(root: &Path, force: bool) -> Result<()> {
    init_stderr_logging("warn")?;

    let options = InitOptions {
        target_dir: root.to_path_buf(),
        force,
    };
    let path = generate_data_dir(&options)?;

    println!("{} {}", "Created".green().bold(), path.display());
    Ok(())
}
