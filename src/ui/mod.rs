//! Presentation layer.
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_view → CatalogView → render → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: The observable view snapshot
//! - [`renderer`]: Plain-text table rendering

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use viewmodel::CatalogView;
