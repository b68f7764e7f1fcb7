//! Record store: the immutable full record set.
//!
//! The store is written only when a load succeeds, and then replaced wholesale.
//! A rejected batch leaves the previous contents untouched, so readers see
//! either the old set or the new one and never a mix.

use crate::domain::error::{CatalogError, Result};
use crate::domain::Record;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Holds the last successfully loaded record set.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    loaded_at: Option<DateTime<Utc>>,
}

impl RecordStore {
    /// Creates an empty store that has never been loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole record set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DataLoad`] if two records share an id. The store
    /// keeps its previous contents in that case.
    pub fn replace(&mut self, records: Vec<Record>) -> Result<()> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records.iter().find(|r| !seen.insert(r.id)) {
            return Err(CatalogError::DataLoad(format!(
                "duplicate record id {}",
                duplicate.id
            )));
        }

        tracing::debug!(
            previous_count = self.records.len(),
            new_count = records.len(),
            "record store replaced"
        );

        self.records = records;
        self.loaded_at = Some(Utc::now());
        Ok(())
    }

    /// Every record, in load order.
    #[must_use]
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` once any load has succeeded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    /// Time of the last successful load.
    #[must_use]
    pub const fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_unloaded() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert!(!store.is_loaded());
        assert_eq!(store.loaded_at(), None);
    }

    #[test]
    fn replace_swaps_everything() {
        let mut store = RecordStore::new();
        store
            .replace(vec![Record::new(1, "A", 1.0, "x", 1.0)])
            .unwrap();
        store
            .replace(vec![
                Record::new(2, "B", 1.0, "x", 1.0),
                Record::new(3, "C", 1.0, "x", 1.0),
            ])
            .unwrap();
        let ids: Vec<u64> = store.all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(store.is_loaded());
    }

    #[test]
    fn duplicate_ids_keep_previous_contents() {
        let mut store = RecordStore::new();
        store
            .replace(vec![Record::new(1, "A", 1.0, "x", 1.0)])
            .unwrap();
        let result = store.replace(vec![
            Record::new(2, "B", 1.0, "x", 1.0),
            Record::new(2, "C", 1.0, "x", 1.0),
        ]);
        assert!(matches!(result, Err(CatalogError::DataLoad(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].id, 1);
    }
}
