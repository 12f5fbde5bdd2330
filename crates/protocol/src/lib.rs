//! # df-protocol
//!
//! Shared data models for dataflow-dash.
//!
//! This crate defines the structures exchanged between the mock generator,
//! the view pipeline, the terminal UI and the CLI:
//! - Pipeline run records and their status
//! - Per-source daily ingestion summaries
//! - View vocabulary (sort keys, sort direction, theme)
//! - Dashboard configuration from `config.toml`
//!
//! ## Modules
//!
//! - [`run_models`]: Pipeline run records
//! - [`summary_models`]: Daily source summaries
//! - [`view_models`]: Sort keys, sort direction, theme
//! - [`config_models`]: Dashboard settings from `config.toml`
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, chrono and ts-rs
//! - TypeScript generation: All types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other dataflow-dash crates

pub mod config_models;
pub mod run_models;
pub mod summary_models;
pub mod view_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use run_models::*;
pub use summary_models::*;
pub use view_models::*;
