//! User-controlled query parameters.
//!
//! [`QueryState`] is the single owned record of what the user asked for: search
//! text, category, sort and page. It is mutated only by the event handler, one
//! field per intent, and every mutation is followed by a full recompute.

use crate::domain::{CategoryFilter, SortColumn};
use std::cmp::Ordering;
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this direction to an ascending ordering.
    ///
    /// `Equal` stays `Equal` in both directions, so a stable sort keeps ties in
    /// their incoming order either way.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Arrow shown next to the sorted column header.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("asc"),
            Self::Descending => f.write_str("desc"),
        }
    }
}

/// Active sort: a column and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Current search, category, sort and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Accepted search text; empty means no search filter.
    pub search_text: String,

    /// Category filter, `All` or one configured category.
    pub category: CategoryFilter,

    /// Active sort, `None` keeps load order.
    pub sort: Option<SortKey>,

    /// 1-based page index.
    ///
    /// Clamped into `[1, max(1, total_pages)]` by every recompute.
    pub page_index: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            sort: None,
            page_index: 1,
        }
    }
}

impl QueryState {
    /// Returns `true` if neither a search nor a category narrows the record set.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.category == CategoryFilter::All
    }

    /// Sorts by `column`, toggling direction if it is already the sort column.
    ///
    /// # Example
    ///
    /// ```rust
    /// use catalogue::query::{QueryState, SortDirection};
    /// use catalogue::SortColumn;
    ///
    /// let mut query = QueryState::default();
    /// query.toggle_sort(SortColumn::Price);
    /// query.toggle_sort(SortColumn::Price);
    /// assert_eq!(query.sort.unwrap().direction, SortDirection::Descending);
    /// ```
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = Some(match self.sort {
            Some(key) if key.column == column => SortKey {
                column,
                direction: key.direction.toggled(),
            },
            _ => SortKey {
                column,
                direction: SortDirection::Ascending,
            },
        });
    }
}
