//! Scaffolding for a new `.dataflow-dash/` directory.
//!
//! # Example
//!
//! ```no_run
//! use df_core::init::{generate_data_dir, InitOptions};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//! };
//!
//! let config_path = generate_data_dir(&options)?;
//! println!("Wrote {}", config_path.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{generate_data_dir, InitOptions};
pub use templates::get_template;
