//! # df-core
//!
//! Mock data generation and view pipeline for dataflow-dash.
//!
//! This crate provides:
//! - Seedable generation of pipeline runs and daily source summaries
//! - Sorting, pagination and day-over-day comparison of that data
//! - The dashboard view state with its named transitions
//! - Theme persistence through a pluggable preference store
//! - Configuration loading from the `.dataflow-dash/` directory
//!
//! ## Modules
//!
//! - [`mock`]: Synthetic data generators
//! - [`view`]: Sort, paginate and compare
//! - [`format`]: Cell formatting
//! - [`state`]: View state and preference storage
//! - [`config`]: Configuration loading
//! - [`init`]: Scaffolding a default configuration

pub mod config;
pub mod format;
pub mod init;
pub mod mock;
pub mod state;
pub mod view;
