//! In-memory source, handy for embedding and for tests.

use crate::domain::error::{CatalogError, Result};
use crate::domain::Record;
use crate::source::backend::DataSource;
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;

/// Yields a fixed record set, or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticSource {
    outcome: std::result::Result<Vec<Record>, String>,
}

impl StaticSource {
    /// Source that always succeeds with `records`.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            outcome: Ok(records),
        }
    }

    /// Source that always fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl DataSource for StaticSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Record>>> {
        let outcome = self
            .outcome
            .clone()
            .map_err(CatalogError::DataLoad);
        future::ready(outcome).boxed()
    }

    fn describe(&self) -> String {
        match &self.outcome {
            Ok(records) => format!("memory ({} records)", records.len()),
            Err(_) => "memory (failing)".to_string(),
        }
    }
}
