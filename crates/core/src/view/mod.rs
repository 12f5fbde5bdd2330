//! Pure view computations over the generated data.
//!
//! - [`sort`]: ordering of runs by column
//! - [`paginate`]: page slicing and the page-link window
//! - [`comparison`]: day-over-day differences per source

pub mod comparison;
pub mod paginate;
pub mod sort;

pub use comparison::{compare_daily, ComparisonRow};
pub use paginate::{page_count, paginate, PageInfo, PageItem, DEFAULT_PAGE_SIZE};
pub use sort::sort_runs;
