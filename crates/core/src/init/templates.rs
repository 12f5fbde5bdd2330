//! Embedded template files for `.dataflow-dash/` initialization.
//!
//! Files in the workspace `templates/` directory are compiled into the
//! binary with `rust-embed`, so `init` needs nothing on disk.

use rust_embed::RustEmbed;

/// Embedded files from the workspace `templates/` directory.
///
/// `CARGO_MANIFEST_DIR` is `crates/core`, so `../../templates` is the
/// workspace root's `templates/`.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path relative to `templates/`.
///
/// # Example
/// ```
/// use df_core::init::templates::get_template;
///
/// let config = get_template("config.toml").expect("config.toml should exist");
/// assert!(config.contains("page-size"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}
