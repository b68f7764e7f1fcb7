//! Data source abstraction.
//!
//! This module defines the [`DataSource`] trait that abstracts over where the
//! record set comes from: a remote HTTP endpoint, a JSON file, or memory. The
//! controller never cares which one it talks to.
//!
//! Fetching is the only operation in the engine that suspends. It is expressed
//! as a boxed future so the trait stays dyn-compatible (`Box<dyn DataSource>`).

use crate::domain::error::Result;
use crate::domain::Record;
use futures_util::future::BoxFuture;

/// A source yielding the full record set once per call.
///
/// # Implementations
///
/// - [`StaticSource`](crate::source::StaticSource): records held in memory
/// - [`FileSource`](crate::source::FileSource): JSON envelope read from disk
/// - `HttpSource`: JSON envelope fetched over HTTP (feature `http`)
///
/// # Examples
///
/// ```
/// use catalogue::source::{DataSource, StaticSource};
/// use catalogue::Record;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let source = StaticSource::new(vec![Record::new(1, "Lamp", 20.0, "home-decoration", 4.5)]);
/// let records = source.fetch().await?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), catalogue::CatalogError>(())
/// # }).unwrap();
/// ```
pub trait DataSource: Send + Sync {
    /// Fetches every record.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the payload cannot be decoded.
    /// A failed fetch yields no records at all, never a partial set.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Record>>>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Record>>> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
