//! Load phase and user-visible error state.
//!
//! # State Machine
//!
//! ```text
//!            Initialize / Reset
//!   Ready ─────────────────────────▶ Loading { generation }
//!     ▲                                   │
//!     └────── RecordsLoaded / LoadFailed ─┘   (current generation only)
//! ```
//!
//! While `Loading`, intents other than `Initialize` and `Reset` are queued and
//! replayed in arrival order once the load settles. `Ready` carries an optional
//! [`ViewError`] describing why the current page is empty, if it is.

use crate::domain::CatalogError;
use std::fmt;

/// Whether a load is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No load in flight; intents apply immediately.
    #[default]
    Ready,

    /// A fetch was issued and has not settled yet.
    ///
    /// Only a completion carrying this generation is accepted; completions of
    /// older, superseded fetches are discarded.
    Loading {
        /// Generation of the most recently issued fetch.
        generation: u64,
    },
}

impl Phase {
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Error shown in place of the page rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Search text was rejected for being too short.
    Validation {
        /// Minimum accepted number of characters.
        min_len: usize,
    },

    /// The active query matched nothing.
    NoResults,

    /// The last load failed; the string describes the cause.
    LoadFailure(String),
}

impl ViewError {
    /// Converts to the equivalent [`CatalogError`].
    #[must_use]
    pub fn to_error(&self) -> CatalogError {
        match self {
            Self::Validation { min_len } => CatalogError::Validation { min_len: *min_len },
            Self::NoResults => CatalogError::NoResults,
            Self::LoadFailure(cause) => CatalogError::DataLoad(cause.clone()),
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_error())
    }
}
