//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O. When an intent needs the record set
//! fetched it returns an [`Action`], and whoever drives the engine executes it
//! (see [`CatalogWorker`](crate::worker::CatalogWorker)) and feeds the outcome
//! back as a load-completion event.
//!
//! # Example
//!
//! ```rust
//! use catalogue::app::{handle_event, Action, AppState, Event};
//! use catalogue::Config;
//!
//! let mut state = AppState::new(Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Initialize)?;
//! assert_eq!(actions, vec![Action::FetchRecords { generation: 1 }]);
//! # Ok::<(), catalogue::CatalogError>(())
//! ```

/// Commands for the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetch the full record set from the data source.
    ///
    /// The outcome must be reported back as `Event::RecordsLoaded` or
    /// `Event::LoadFailed` carrying the same generation.
    FetchRecords {
        /// Load generation this fetch belongs to.
        generation: u64,
    },
}
