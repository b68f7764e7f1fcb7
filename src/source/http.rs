//! HTTP source for the remote catalog endpoint.

use crate::domain::error::{CatalogError, Result};
use crate::domain::Record;
use crate::source::backend::DataSource;
use crate::source::json::parse_payload;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::Client;
use std::time::Duration;

/// Fetches the JSON envelope with a GET request on every load.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Creates a source for `url` with a 30 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CatalogError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn get(&self) -> Result<Vec<Record>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Http(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Http(format!("unexpected status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Http(format!("failed to read body: {e}")))?;

        parse_payload(&body)
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Record>>> {
        async move {
            tracing::debug!(url = %self.url, "fetching catalog");
            self.get().await
        }
        .boxed()
    }

    fn describe(&self) -> String {
        format!("http {}", self.url)
    }
}
