//! Page slicing with page-index clamping.
//!
//! A stale page index (for example page 4 after a search shrank the result set
//! to two pages) is corrected instead of producing an empty page.

use crate::domain::Record;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    /// Records on this page, at most `page_size` of them.
    pub items: &'a [Record],

    /// Page index after clamping, always at least 1.
    pub page_index: usize,

    /// `ceil(count / page_size)`, 0 for an empty result.
    pub total_pages: usize,
}

/// Number of pages needed for `count` records.
///
/// A `page_size` of 0 is treated as 1.
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = if page_size == 0 { 1 } else { page_size };
    count.div_ceil(page_size)
}

/// Clamps a requested page into `[1, max(1, total_pages)]`.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Slices `records` into the requested page.
///
/// # Example
///
/// ```rust
/// use catalogue::query::paginate;
/// use catalogue::Record;
///
/// let records: Vec<Record> = (1..=12)
///     .map(|id| Record::new(id, format!("Item {id}"), 1.0, "groceries", 1.0))
///     .collect();
/// let page = paginate(&records, 5, 5);
/// assert_eq!(page.page_index, 3);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.items.len(), 2);
/// ```
#[must_use]
pub fn paginate(records: &[Record], requested: usize, page_size: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(records.len(), page_size);
    let page_index = clamp_page(requested, total_pages);

    let start = ((page_index - 1) * page_size).min(records.len());
    let end = (start + page_size).min(records.len());

    Page {
        items: &records[start..end],
        page_index,
        total_pages,
    }
}
