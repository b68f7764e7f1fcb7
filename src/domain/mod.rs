//! Domain layer for the catalogue engine.
//!
//! Core types independent of how records are fetched or how results are shown.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Product records, sortable columns and the category filter

pub mod error;
pub mod record;

pub use error::{CatalogError, Result};
pub use record::{CategoryFilter, Record, SortColumn, ALL_CATEGORIES};
