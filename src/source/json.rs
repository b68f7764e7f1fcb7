//! JSON payload format and file-backed source.
//!
//! The remote catalog answers with an envelope wrapping the product list:
//!
//! ```json
//! {
//!   "products": [
//!     {
//!       "id": 1,
//!       "title": "iPhone 9",
//!       "price": 549,
//!       "rating": 4.69,
//!       "category": "smartphones"
//!     }
//!   ],
//!   "total": 100,
//!   "skip": 0,
//!   "limit": 30
//! }
//! ```
//!
//! Only `products` is required; paging metadata and extra product fields are
//! ignored. The same format is accepted from files.

use crate::domain::error::Result;
use crate::domain::Record;
use crate::source::backend::DataSource;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level payload shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    /// Every product in the catalog.
    pub products: Vec<Record>,

    /// Total product count reported by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Decodes a JSON envelope into records, preserving their order.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`](crate::CatalogError::Parse) if the text is not
/// a valid envelope.
///
/// # Examples
///
/// ```
/// use catalogue::source::parse_payload;
///
/// let records = parse_payload(r#"{"products":[
///     {"id":1,"title":"iPhone 9","price":549,"rating":4.69,"category":"smartphones"}
/// ]}"#)?;
/// assert_eq!(records[0].title, "iPhone 9");
/// # Ok::<(), catalogue::CatalogError>(())
/// ```
pub fn parse_payload(text: &str) -> Result<Vec<Record>> {
    let payload: Payload = serde_json::from_str(text)?;

    tracing::debug!(
        product_count = payload.products.len(),
        reported_total = ?payload.total,
        "decoded catalog payload"
    );

    Ok(payload.products)
}

/// Serializes records into the envelope format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_payload(records: &[Record]) -> Result<String> {
    let payload = Payload {
        products: records.to_vec(),
        total: Some(records.len() as u64),
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Reads the envelope from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Record>>> {
        async move {
            tracing::debug!(path = ?self.path, "reading catalog file");
            let contents = tokio::fs::read_to_string(&self.path).await?;
            parse_payload(&contents)
        }
        .boxed()
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogError;
    use std::io::Write;

    #[test]
    fn parses_envelope_with_extra_fields() {
        let text = r#"{
            "products": [
                {"id": 1, "title": "iPhone 9", "description": "An apple mobile",
                 "price": 549, "discountPercentage": 12.96, "rating": 4.69,
                 "stock": 94, "brand": "Apple", "category": "smartphones",
                 "images": ["a.jpg"]},
                {"id": 2, "title": "iPhone X", "price": 899, "rating": 4.44,
                 "category": "smartphones"}
            ],
            "total": 100, "skip": 0, "limit": 30
        }"#;
        let records = parse_payload(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title, "iPhone X");
    }

    #[test]
    fn missing_products_is_an_error() {
        assert!(matches!(
            parse_payload(r#"{"total": 0}"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn file_source_reads_payload() {
        let records = vec![
            Record::new(7, "Lamp", 20.0, "home-decoration", 4.5),
            Record::new(8, "Rice", 2.5, "groceries", 3.9),
        ];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(to_payload(&records).unwrap().as_bytes()).unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.fetch().await.unwrap(), records);
    }

    #[tokio::test]
    async fn file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.fetch().await, Err(CatalogError::Io(_))));
    }
}
