//! Event handling and state transition logic.
//!
//! This module implements the catalog controller's core: it receives user
//! intents and load completions, validates them, mutates [`AppState`] and
//! returns the side effects the runtime must perform.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the renderer (intents) or the worker (load outcomes)
//! 2. [`handle_event`] validates and pattern-matches the event
//! 3. Exactly one query field changes, then results are fully recomputed
//! 4. Actions are collected and returned for execution
//!
//! Every valid intent recomputes from the full record set with the *current*
//! search text, category and sort, so changing one dimension never drops
//! another.
//!
//! # Example
//!
//! ```rust
//! use catalogue::app::{handle_event, AppState, Event};
//! use catalogue::{Config, Record};
//!
//! let mut state = AppState::new(Config::default());
//! handle_event(&mut state, &Event::Initialize)?;
//! handle_event(&mut state, &Event::RecordsLoaded {
//!     generation: 1,
//!     records: vec![Record::new(1, "Apple Phone", 500.0, "smartphones", 4.0)],
//! })?;
//! handle_event(&mut state, &Event::SubmitSearch("apple".into()))?;
//! assert_eq!(state.page_items.len(), 1);
//! # Ok::<(), catalogue::CatalogError>(())
//! ```

use crate::app::modes::{Phase, ViewError};
use crate::app::{Action, AppState};
use crate::domain::error::{CatalogError, Result};
use crate::domain::{CategoryFilter, Record, SortColumn};
use crate::query::QueryState;

/// Intents from the renderer and load outcomes from the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Loads the record set and resets the query to defaults on success.
    Initialize,

    /// Clears the error and reloads; identical to `Initialize` once issued.
    Reset,

    /// Applies a search on titles. Rejected if shorter than the minimum length.
    SubmitSearch(String),

    /// Selects `"All"` or one of the configured categories.
    ChangeCategory(String),

    /// Sorts by a column, toggling direction if it is already the sort column.
    SortBy(SortColumn),

    /// Moves to a 1-based page, clamped to the available range.
    SelectPage(usize),

    /// A fetch finished successfully.
    RecordsLoaded {
        /// Generation from the originating `Action::FetchRecords`.
        generation: u64,
        /// Full record set in source order.
        records: Vec<Record>,
    },

    /// A fetch failed.
    LoadFailed {
        /// Generation from the originating `Action::FetchRecords`.
        generation: u64,
        /// Description of the failure.
        message: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the visible view may have changed, and the side
/// effects to run in order.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidCategory`] for a category that is neither
/// `All` nor configured. State is untouched in that case. Too-short searches are
/// not errors at this level: they are shown through the view.
///
/// # Queueing
///
/// While a load is in flight, intents are validated, queued, and replayed in
/// arrival order after the load settles. `Initialize` and `Reset` are never
/// queued; they supersede the in-flight load.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = ?EventKind(event)).entered();

    match event {
        Event::Initialize | Event::Reset => {
            if let Phase::Loading { generation } = state.phase {
                tracing::debug!(superseded = generation, "superseding in-flight load");
            }
            let generation = state.begin_load();
            tracing::debug!(generation, "load requested");
            Ok((true, vec![Action::FetchRecords { generation }]))
        }
        Event::RecordsLoaded {
            generation,
            records,
        } => {
            if !state.is_current_load(*generation) {
                tracing::debug!(generation, "discarding stale load result");
                return Ok((false, vec![]));
            }

            match state.store.replace(records.clone()) {
                Ok(()) => {
                    tracing::info!(record_count = records.len(), "records loaded");
                    state.load_failure = None;
                    state.query = QueryState::default();
                    state.recompute();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "rejected loaded records");
                    let cause = e.into_load_cause();
                    state.load_failure = Some(cause.clone());
                    state.show_error(ViewError::LoadFailure(cause));
                }
            }

            state.phase = Phase::Ready;
            Ok((true, replay_pending(state)))
        }
        Event::LoadFailed {
            generation,
            message,
        } => {
            if !state.is_current_load(*generation) {
                tracing::debug!(generation, "discarding stale load failure");
                return Ok((false, vec![]));
            }

            tracing::warn!(generation, error = %message, "record load failed");
            state.load_failure = Some(message.clone());
            state.show_error(ViewError::LoadFailure(message.clone()));
            state.phase = Phase::Ready;
            Ok((true, replay_pending(state)))
        }
        intent => {
            if let Event::ChangeCategory(category) = intent {
                if !state.is_known_category(&CategoryFilter::parse(category)) {
                    tracing::debug!(category = %category, "rejecting unknown category");
                    return Err(CatalogError::InvalidCategory(category.clone()));
                }
            }

            if state.phase.is_loading() {
                tracing::debug!(queued = state.pending.len() + 1, "load in flight, queueing intent");
                state.pending.push_back(intent.clone());
                return Ok((false, vec![]));
            }

            apply_intent(state, intent);
            Ok((true, vec![]))
        }
    }
}

/// Applies a validated query intent while `Ready`.
fn apply_intent(state: &mut AppState, intent: &Event) {
    match intent {
        Event::SubmitSearch(text) => {
            let min_len = state.config.min_search_len;
            if text.chars().count() < min_len {
                tracing::debug!(query = %text, min_len, "rejecting short search");
                state.show_error(ViewError::Validation { min_len });
                return;
            }
            state.query.search_text.clone_from(text);
            state.query.page_index = 1;
            state.recompute();
        }
        Event::ChangeCategory(category) => {
            state.query.category = CategoryFilter::parse(category);
            state.query.page_index = 1;
            state.recompute();
        }
        Event::SortBy(column) => {
            state.query.toggle_sort(*column);
            if let Some(key) = state.query.sort {
                tracing::debug!(column = %key.column, direction = %key.direction, "sort applied");
            }
            state.recompute();
        }
        Event::SelectPage(page_index) => {
            state.query.page_index = *page_index;
            state.refresh_page();
        }
        Event::Initialize
        | Event::Reset
        | Event::RecordsLoaded { .. }
        | Event::LoadFailed { .. } => {
            unreachable!("load events are handled before apply_intent")
        }
    }
}

/// Drains intents queued during a load, in arrival order.
fn replay_pending(state: &mut AppState) -> Vec<Action> {
    let mut actions = vec![];

    while let Some(event) = state.pending.pop_front() {
        match handle_event(state, &event) {
            Ok((_, more)) => actions.extend(more),
            Err(e) => tracing::debug!(error = %e, "queued intent rejected on replay"),
        }
    }

    actions
}

/// Compact `Debug` for spans, without dumping whole record sets.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::RecordsLoaded {
                generation,
                records,
            } => write!(f, "RecordsLoaded {{ generation: {generation}, count: {} }}", records.len()),
            other => write!(f, "{other:?}"),
        }
    }
}
