//! Application state and derived result computation.
//!
//! [`AppState`] owns everything the controller knows: the record store, the
//! query state, the derived result and the load phase. It is the single source
//! of truth; renderers only ever see a [`CatalogView`] snapshot.
//!
//! # Architecture
//!
//! `AppState` separates core data (records, query) from derived state
//! (filtered results, current page, error). Derived state is never patched
//! incrementally:
//!
//! - [`AppState::recompute`] reruns the whole pipeline and then the paginator
//! - [`AppState::refresh_page`] reruns only the paginator over cached results
//!
//! # Example
//!
//! ```rust
//! use catalogue::app::AppState;
//! use catalogue::Config;
//!
//! let mut state = AppState::new(Config::default());
//! state.recompute();
//! let view = state.compute_view();
//! assert_eq!(view.total_pages, 0);
//! ```

use super::handler::Event;
use super::modes::{Phase, ViewError};
use crate::domain::{CategoryFilter, Record};
use crate::query::{clamp_page, paginate, run_pipeline, QueryState};
use crate::source::RecordStore;
use crate::ui::viewmodel::CatalogView;
use crate::Config;
use std::collections::VecDeque;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page size, category list and search rules.
    pub config: Config,

    /// Last successfully loaded record set.
    pub store: RecordStore,

    /// Current search, category, sort and page.
    pub query: QueryState,

    /// Pipeline output for the current query, in display order.
    ///
    /// Recomputed by `recompute()`; `refresh_page()` slices it.
    pub filtered: Vec<Record>,

    /// Records on the current page.
    pub page_items: Vec<Record>,

    /// Page count of `filtered`, 0 when empty or when a search was rejected.
    pub total_pages: usize,

    /// Why the page is empty, if it is.
    pub error: Option<ViewError>,

    /// Whether a load is in flight.
    pub phase: Phase,

    /// Intents received while loading, replayed in order once it settles.
    pub pending: VecDeque<Event>,

    /// Cause of the most recent failed load, cleared by a successful one.
    pub load_failure: Option<String>,

    last_generation: u64,
}

impl AppState {
    /// Creates an empty, never-loaded state with default query parameters.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: RecordStore::new(),
            query: QueryState::default(),
            filtered: vec![],
            page_items: vec![],
            total_pages: 0,
            error: None,
            phase: Phase::Ready,
            pending: VecDeque::new(),
            load_failure: None,
            last_generation: 0,
        }
    }

    /// Reruns the pipeline over the full record set, then the paginator.
    pub fn recompute(&mut self) {
        self.filtered = run_pipeline(self.store.all(), &self.query);
        self.refresh_page();
    }

    /// Reslices the cached results for the current page index.
    ///
    /// Clamps `query.page_index` and resolves the error message: the last load
    /// failure stays visible while nothing has ever loaded, an empty result
    /// under an active search or category reads as "no results", anything else
    /// clears the error.
    pub fn refresh_page(&mut self) {
        let page = paginate(&self.filtered, self.query.page_index, self.config.page_size);

        self.query.page_index = page.page_index;
        self.page_items = page.items.to_vec();
        self.total_pages = page.total_pages;

        self.error = match &self.load_failure {
            Some(cause) if !self.store.is_loaded() => Some(ViewError::LoadFailure(cause.clone())),
            _ if self.filtered.is_empty() && !self.query.is_unfiltered() => Some(ViewError::NoResults),
            _ => None,
        };

        tracing::debug!(
            page_index = self.query.page_index,
            total_pages = self.total_pages,
            page_len = self.page_items.len(),
            error = ?self.error,
            "page refreshed"
        );
    }

    /// Blanks the page and shows `error` instead.
    ///
    /// Query state and cached results are left alone so the next valid intent
    /// picks up where the user was.
    pub fn show_error(&mut self, error: ViewError) {
        self.page_items.clear();
        self.total_pages = 0;
        self.error = Some(error);
    }

    /// Starts a new load generation and enters `Loading`.
    ///
    /// Clears any visible error. Returns the generation the fetch must report.
    pub fn begin_load(&mut self) -> u64 {
        self.last_generation += 1;
        self.phase = Phase::Loading {
            generation: self.last_generation,
        };
        self.error = None;
        self.last_generation
    }

    /// Returns `true` if `generation` is the load currently awaited.
    #[must_use]
    pub fn is_current_load(&self, generation: u64) -> bool {
        self.phase == Phase::Loading { generation }
    }

    /// Returns `true` if `category` is `All` or one of the configured categories.
    #[must_use]
    pub fn is_known_category(&self, category: &CategoryFilter) -> bool {
        match category {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => self.config.categories.iter().any(|c| c == name),
        }
    }

    /// Snapshot of everything a renderer needs.
    ///
    /// While an error blanks the page the view reports page 1 of an empty
    /// result; `query.page_index` keeps the position for the next valid intent.
    #[must_use]
    pub fn compute_view(&self) -> CatalogView {
        let blanked = self.total_pages == 0;
        CatalogView {
            page_items: self.page_items.clone(),
            total_pages: self.total_pages,
            current_page: clamp_page(self.query.page_index, self.total_pages),
            error_message: self.error.as_ref().map(ToString::to_string),
            search_text: self.query.search_text.clone(),
            category: self.query.category.clone(),
            sort: self.query.sort,
            total_records: if blanked { 0 } else { self.filtered.len() },
            loaded_at: self.store.loaded_at(),
            is_loading: self.phase.is_loading(),
        }
    }
}
