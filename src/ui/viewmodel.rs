//! View model representing the externally observable catalog state.
//!
//! A [`CatalogView`] is computed by `AppState::compute_view()` after every event
//! and consumed by renderers. It contains no business logic, only display-ready
//! data.

use crate::domain::{CategoryFilter, Record};
use crate::query::SortKey;
use chrono::{DateTime, Utc};

/// Everything a renderer needs to draw the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Records on the current page, at most one page size long.
    pub page_items: Vec<Record>,

    /// Number of pages in the current result, 0 when nothing is shown.
    pub total_pages: usize,

    /// 1-based index of the current page.
    pub current_page: usize,

    /// Message shown instead of rows (validation, no results, load failure).
    pub error_message: Option<String>,

    /// Search text currently applied.
    pub search_text: String,

    /// Category currently applied.
    pub category: CategoryFilter,

    /// Active sort, for header markers.
    pub sort: Option<SortKey>,

    /// Size of the filtered result across all pages.
    pub total_records: usize,

    /// Time of the last successful load.
    pub loaded_at: Option<DateTime<Utc>>,

    /// Whether a load is in flight.
    pub is_loading: bool,
}

impl CatalogView {
    /// Returns `true` if there is a page after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if there is a page before the current one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}
