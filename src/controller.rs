//! Async façade over the event handler and the worker.
//!
//! [`CatalogController`] exposes the catalog operations as methods. Each call
//! runs its event through [`handle_event`], executes the resulting actions with
//! the [`CatalogWorker`], and feeds completions back until nothing is left, so
//! when a method returns the view is settled.
//!
//! Methods take `&mut self`: intents are processed strictly in call order and no
//! recompute ever interleaves with another. Embedders that need intents to keep
//! flowing while a fetch is in flight should drive [`AppState`] and
//! [`handle_event`] directly; intents arriving during a load are then queued.
//!
//! # Example
//!
//! ```rust
//! use catalogue::source::StaticSource;
//! use catalogue::{CatalogController, Config, Record, SortColumn};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = StaticSource::new(vec![
//!     Record::new(1, "Apple Phone", 500.0, "smartphones", 4.0),
//!     Record::new(2, "Apple Laptop", 1000.0, "laptops", 3.0),
//! ]);
//! let mut catalog = CatalogController::new(Config::default(), source);
//! catalog.initialize().await;
//! catalog.submit_search("Apple").await;
//! catalog.change_category("smartphones").await?;
//! catalog.sort_by(SortColumn::Price).await;
//!
//! let view = catalog.view();
//! assert_eq!(view.page_items.len(), 1);
//! assert_eq!(view.page_items[0].id, 1);
//! # Ok::<(), catalogue::CatalogError>(())
//! # }).unwrap();
//! ```

use crate::app::{handle_event, AppState, Event};
use crate::domain::error::Result;
use crate::domain::SortColumn;
use crate::source::DataSource;
use crate::ui::CatalogView;
use crate::worker::CatalogWorker;
use crate::Config;
use std::collections::VecDeque;

/// Owns the catalog state and the data source.
pub struct CatalogController {
    state: AppState,
    worker: CatalogWorker,
}

impl CatalogController {
    /// Creates a controller with an empty store; call [`initialize`](Self::initialize) next.
    pub fn new(config: Config, source: impl DataSource + 'static) -> Self {
        let worker = CatalogWorker::new(source);
        tracing::debug!(source = %worker.source_description(), "catalog controller created");
        Self {
            state: AppState::new(config),
            worker,
        }
    }

    /// Loads the record set. On success the query resets to defaults; on
    /// failure the view shows the load-failure message.
    pub async fn initialize(&mut self) {
        self.run_infallible(Event::Initialize).await;
    }

    /// Clears the error and reloads. On failure the previous records and query
    /// are kept.
    pub async fn reset(&mut self) {
        self.run_infallible(Event::Reset).await;
    }

    /// Applies a title search; too-short text is shown as a validation error.
    pub async fn submit_search(&mut self, text: &str) {
        self.run_infallible(Event::SubmitSearch(text.to_string())).await;
    }

    /// Selects `"All"` or a configured category, keeping the active search.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidCategory`](crate::CatalogError::InvalidCategory)
    /// for an unknown category; nothing changes in that case.
    pub async fn change_category(&mut self, category: &str) -> Result<()> {
        self.dispatch(Event::ChangeCategory(category.to_string()))
            .await
            .map(|_| ())
    }

    /// Sorts by `column`, toggling direction on repeat.
    pub async fn sort_by(&mut self, column: SortColumn) {
        self.run_infallible(Event::SortBy(column)).await;
    }

    /// Moves to a 1-based page; out-of-range pages are clamped.
    pub async fn select_page(&mut self, page_index: usize) {
        self.run_infallible(Event::SelectPage(page_index)).await;
    }

    /// Snapshot of the current view.
    #[must_use]
    pub fn view(&self) -> CatalogView {
        self.state.compute_view()
    }

    /// Read access to the underlying state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs an event and every follow-up it causes.
    ///
    /// Returns whether the view should be redrawn.
    ///
    /// # Errors
    ///
    /// Returns the error of the initial event if it was rejected. Follow-up
    /// load completions never fail.
    pub async fn dispatch(&mut self, event: Event) -> Result<bool> {
        let (mut render, actions) = handle_event(&mut self.state, &event)?;
        let mut actions: VecDeque<_> = actions.into();

        while let Some(action) = actions.pop_front() {
            let completion = self.worker.execute(action).await;
            let (more_render, more) = handle_event(&mut self.state, &completion)?;
            render |= more_render;
            actions.extend(more);
        }

        Ok(render)
    }

    async fn run_infallible(&mut self, event: Event) {
        if let Err(e) = self.dispatch(event).await {
            tracing::error!(error = %e, "unexpected rejection");
        }
    }
}
