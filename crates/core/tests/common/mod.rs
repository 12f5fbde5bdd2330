//! Common test utilities shared by the integration tests.
//!
//! - Fixtures (seeded states, sample dates, temporary projects)
//! - Custom assertions over run sequences

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
