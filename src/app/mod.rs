//! Application layer: the catalog controller as an event-driven state machine.
//!
//! This module sits between whatever drives the engine (a terminal adapter, a
//! UI binding, a test) and the query/source layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Intent → Event → Event Handler → QueryState Mutation → Pipeline → Paginator → View
//!                        ↑                                  │
//!                        └──────── Load Completions ◀── Actions (fetch)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Load phase and view error types
//! - [`state`]: Central application state container and view computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Phase, ViewError};
pub use state::AppState;
