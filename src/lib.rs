//! Catalogue: a query engine for browsing a product catalog.
//!
//! Catalogue loads a product record set from a data source and lets a caller
//! narrow, order and page through it:
//! - Title search with a minimum length and case-insensitive matching
//! - Category filtering that composes with the active search
//! - Stable column sorting with a toggling direction
//! - Fixed-size pagination with clamped page selection
//! - Reset and reload, with stale load completions discarded

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal adapter (main.rs) / CatalogController     │  ← Entry points
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and intent queueing               │
//! │  - Load generations                                 │
//! │  - View computation                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query Layer   │   │ Source Layer  │   │ Worker Layer  │
//! │ (query/)      │   │ (source/)     │   │ (worker/)     │
//! │ - Pipeline    │   │ - JSON / HTTP │   │ - Async fetch │
//! │ - Collation   │   │ - Store       │   │ - Completions │
//! │ - Paginator   │   │ - Backend API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and UI (ui/)                      │
//! │  - Records, columns, category filter, errors        │
//! │  - View model and plain-text renderer               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`controller`]: Async façade driving the state machine and worker
//! - [`domain`]: Core domain types (Record, errors)
//! - [`query`]: Filter/search/sort pipeline and paginator
//! - [`source`]: Data sources and the record store
//! - [`worker`]: Executes fetch actions
//! - [`ui`]: View model and rendering
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! The binary reads an optional TOML file; every key has a default:
//!
//! ```toml
//! page_size = 5
//! categories = ["smartphones", "laptops", "fragrances", "skincare", "groceries", "home-decoration"]
//! source_url = "https://dummyjson.com/products"
//! min_search_len = 3
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ## Driving the state machine directly
//!
//! ```rust
//! use catalogue::{handle_event, initialize, Action, Config, Event, Record};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Initialize)?;
//! let Action::FetchRecords { generation } = actions[0];
//!
//! // The caller fetches records however it likes and reports back.
//! let records = vec![Record::new(1, "iPhone 9", 549.0, "smartphones", 4.69)];
//! handle_event(&mut state, &Event::RecordsLoaded { generation, records })?;
//!
//! handle_event(&mut state, &Event::SubmitSearch("iphone".into()))?;
//! assert_eq!(state.compute_view().page_items.len(), 1);
//! # Ok::<(), catalogue::CatalogError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Load Generations
//!
//! Every load carries a generation number. Only the newest generation may
//! update the store; completions from superseded loads are dropped. Intents
//! that arrive mid-load are queued and replayed once it settles.
//!
//! ## Immutable View Models
//!
//! Observers read a [`CatalogView`] snapshot computed from state, never the
//! state itself.

pub mod app;
pub mod controller;
pub mod domain;
pub mod observability;
pub mod query;
pub mod source;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, Phase, ViewError};
pub use controller::CatalogController;
pub use domain::{CatalogError, CategoryFilter, Record, Result, SortColumn};
pub use ui::CatalogView;

use serde::Deserialize;
use std::path::Path;

/// Default categories offered when no configuration overrides them.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "smartphones",
    "laptops",
    "fragrances",
    "skincare",
    "groceries",
    "home-decoration",
];

/// Default endpoint for the HTTP source.
pub const DEFAULT_SOURCE_URL: &str = "https://dummyjson.com/products";

/// Engine configuration.
///
/// Loaded from TOML; missing keys take their defaults.
///
/// # Example
///
/// ```rust
/// use catalogue::Config;
///
/// let config = Config::from_toml_str("page_size = 10").unwrap();
/// assert_eq!(config.page_size, 10);
/// assert_eq!(config.min_search_len, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Records per page. Must be at least 1. Default: 5
    pub page_size: usize,

    /// Categories a caller may select besides `"All"`.
    pub categories: Vec<String>,

    /// Endpoint the HTTP source fetches from.
    pub source_url: String,

    /// Minimum number of characters an accepted search must have. Default: 3
    pub min_search_len: usize,

    /// Tracing level.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: query::DEFAULT_PAGE_SIZE,
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            min_search_len: 3,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the text is not valid TOML for this
    /// shape or if `page_size` is zero.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| CatalogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CatalogError::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Creates an empty [`AppState`] for `config`.
///
/// The store is empty until an [`Event::Initialize`] load completes.
///
/// # Example
///
/// ```rust
/// use catalogue::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(!state.store.is_loaded());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        page_size = config.page_size,
        categories = config.categories.len(),
        "initializing catalogue"
    );
    AppState::new(config.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.min_search_len, 3);
        assert_eq!(config.categories.len(), 6);
        assert!(config.categories.iter().any(|c| c == "home-decoration"));
        assert_eq!(config.source_url, "https://dummyjson.com/products");
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = Config::from_toml_str("categories = [\"laptops\"]\n").unwrap();
        assert_eq!(config.categories, vec!["laptops"]);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = Config::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = Config::from_toml_str("page_size = \"five\"").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn reads_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 8\ntrace_level = \"debug\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_file("/definitely/not/catalogue.toml").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
