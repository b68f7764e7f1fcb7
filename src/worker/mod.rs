//! Background execution of fetch actions.
//!
//! - `handler`: the [`CatalogWorker`] that runs actions against a data source

pub mod handler;

pub use handler::CatalogWorker;
