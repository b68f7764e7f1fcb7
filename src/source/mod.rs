//! Record sources and the record store.
//!
//! # Modules
//!
//! - `backend`: the [`DataSource`] trait
//! - `json`: the catalog JSON envelope and a file-backed source
//! - `memory`: an in-memory source
//! - `http`: a `reqwest`-backed source (feature `http`)
//! - `store`: the [`RecordStore`] holding the last good record set

pub mod backend;
#[cfg(feature = "http")]
pub mod http;
pub mod json;
pub mod memory;
pub mod store;

pub use backend::DataSource;
#[cfg(feature = "http")]
pub use http::HttpSource;
pub use json::{parse_payload, to_payload, FileSource, Payload};
pub use memory::StaticSource;
pub use store::RecordStore;
