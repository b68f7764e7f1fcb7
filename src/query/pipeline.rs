//! Query pipeline: category filter, search filter, sort.
//!
//! [`run_pipeline`] is a pure function from the full record set and the non-page
//! fields of [`QueryState`] to an ordered result. Filters always run in the same
//! order regardless of which field changed last, so the output depends only on
//! the inputs:
//!
//! 1. **Category**: keep everything for `All`, otherwise exact category match
//! 2. **Search**: case-insensitive substring match against the title (empty = no-op)
//! 3. **Sort**: stable sort on the active column, load order if none
//!
//! Search text validation (minimum length) happens in the event handler before
//! the pipeline is ever called with new text.

use crate::domain::{Record, SortColumn};
use crate::query::collate::natural_cmp;
use crate::query::state::{QueryState, SortKey};
use std::cmp::Ordering;

/// Filters and sorts `records` according to `query`, ignoring `query.page_index`.
///
/// # Example
///
/// ```rust
/// use catalogue::query::{run_pipeline, QueryState};
/// use catalogue::Record;
///
/// let records = vec![
///     Record::new(1, "Apple Phone", 500.0, "smartphones", 4.0),
///     Record::new(2, "Apple Laptop", 1000.0, "laptops", 3.0),
/// ];
/// let query = QueryState {
///     search_text: "apple".to_string(),
///     category: catalogue::CategoryFilter::parse("smartphones"),
///     ..QueryState::default()
/// };
/// let results = run_pipeline(&records, &query);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].id, 1);
/// ```
#[must_use]
pub fn run_pipeline(records: &[Record], query: &QueryState) -> Vec<Record> {
    let _span = tracing::debug_span!("run_pipeline",
        total_records = records.len(),
        query_len = query.search_text.chars().count(),
        category = %query.category,
        sort = ?query.sort
    )
    .entered();

    let needle = query.search_text.to_lowercase();

    let mut results: Vec<Record> = records
        .iter()
        .filter(|record| query.category.admits(record))
        .filter(|record| needle.is_empty() || record.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if let Some(key) = query.sort {
        sort_records(&mut results, key);
    }

    tracing::debug!(filtered_count = results.len(), "pipeline applied");

    results
}

/// Stable in-place sort by one column.
pub fn sort_records(records: &mut [Record], key: SortKey) {
    records.sort_by(|a, b| key.direction.apply(compare_column(a, b, key.column)));
}

/// Ascending comparison of two records on one column.
///
/// Numeric columns use IEEE total ordering so `NaN` never breaks the sort.
#[must_use]
pub fn compare_column(a: &Record, b: &Record, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Title => natural_cmp(&a.title, &b.title),
        SortColumn::Category => natural_cmp(&a.category, &b.category),
        SortColumn::Price => a.price.total_cmp(&b.price),
        SortColumn::Rating => a.rating.total_cmp(&b.rating),
    }
}
