//! Worker that executes fetch actions against a data source.
//!
//! The event handler stays free of I/O; this worker is the only place that
//! awaits. It turns an [`Action`] into the completion [`Event`] the handler
//! expects, so failures travel back as data rather than as panics or errors.

use crate::app::{Action, Event};
use crate::domain::error::Result;
use crate::domain::Record;
use crate::source::DataSource;
use tracing::Instrument;

/// Executes actions emitted by the event handler.
pub struct CatalogWorker {
    source: Box<dyn DataSource>,
}

impl CatalogWorker {
    /// Creates a worker fetching from `source`.
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Describes the underlying source for logs.
    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Helper for turning a fetch outcome into a completion event with
    /// consistent logging.
    fn completion_event(generation: u64, result: Result<Vec<Record>>) -> Event {
        match result {
            Ok(records) => {
                tracing::debug!(generation, record_count = records.len(), "fetch successful");
                Event::RecordsLoaded {
                    generation,
                    records,
                }
            }
            Err(e) => {
                tracing::warn!(generation, error = %e, "fetch failed");
                Event::LoadFailed {
                    generation,
                    message: e.into_load_cause(),
                }
            }
        }
    }

    /// Runs one action and returns the event reporting its outcome.
    pub async fn execute(&self, action: Action) -> Event {
        let span = tracing::debug_span!("worker_execute", action = ?action, source = %self.source.describe());

        match action {
            Action::FetchRecords { generation } => {
                let result = self.source.fetch().instrument(span).await;
                Self::completion_event(generation, result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    #[tokio::test]
    async fn successful_fetch_reports_records() {
        let worker = CatalogWorker::new(StaticSource::new(vec![Record::new(
            1, "Lamp", 20.0, "home-decoration", 4.5,
        )]));
        let event = worker.execute(Action::FetchRecords { generation: 4 }).await;
        assert!(matches!(
            event,
            Event::RecordsLoaded { generation: 4, ref records } if records.len() == 1
        ));
    }

    #[tokio::test]
    async fn failed_fetch_reports_message() {
        let worker = CatalogWorker::new(StaticSource::failing("connection refused"));
        let event = worker.execute(Action::FetchRecords { generation: 2 }).await;
        assert_eq!(
            event,
            Event::LoadFailed {
                generation: 2,
                message: "connection refused".into(),
            }
        );
    }
}
