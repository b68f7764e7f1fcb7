//! Product record domain model.
//!
//! A [`Record`] is one catalog item as delivered by the data source. Records are
//! immutable once loaded and identified by `id`. This module also defines the
//! sortable columns and the category filter used by the query state.

use crate::domain::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the category filter value that keeps every record.
pub const ALL_CATEGORIES: &str = "All";

/// One catalog item.
///
/// Extra fields in the source payload (description, stock, images, ...) are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub rating: f64,
}

impl Record {
    /// Creates a record from its five fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalogue::Record;
    ///
    /// let record = Record::new(1, "iPhone 9", 549.0, "smartphones", 4.69);
    /// assert_eq!(record.title, "iPhone 9");
    /// ```
    #[must_use]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
            rating,
        }
    }
}

/// A column the result set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Title,
    Price,
    Category,
    Rating,
}

impl SortColumn {
    /// All columns in display order.
    pub const ALL: [Self; 4] = [Self::Title, Self::Price, Self::Category, Self::Rating];

    /// Column header shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Product name",
            Self::Price => "Price",
            Self::Category => "Category",
            Self::Rating => "Rating",
        }
    }

    /// Field name as it appears in the record payload.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Price => "price",
            Self::Category => "category",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownColumn(s.to_string()))
    }
}

/// Category selection: every record, or only records of one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a user-supplied category; `"All"` selects every record.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Returns `true` if `record` passes this filter.
    #[must_use]
    pub fn admits(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => record.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(category) => f.write_str(category),
        }
    }
}
