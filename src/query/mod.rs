//! Pure query transforms over the record set.
//!
//! ```text
//! Records + QueryState → run_pipeline → ordered results → paginate → Page
//! ```
//!
//! # Modules
//!
//! - [`state`]: Query parameters (search, category, sort, page)
//! - [`pipeline`]: Category filter, search filter and stable sort
//! - [`paginator`]: Page slicing with clamping
//! - [`collate`]: Numeric-aware, case-insensitive string comparison

pub mod collate;
pub mod paginator;
pub mod pipeline;
pub mod state;

pub use collate::natural_cmp;
pub use paginator::{clamp_page, paginate, total_pages, Page, DEFAULT_PAGE_SIZE};
pub use pipeline::{compare_column, run_pipeline, sort_records};
pub use state::{QueryState, SortDirection, SortKey};
