//! In-process backend keyed by `database.collection`.

use super::{namespace, CollectionStore, StoreError};
use crate::data::RentRecord;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<RentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents currently held in `database.collection`.
    pub fn documents(&self, database: &str, collection: &str) -> &[RentRecord] {
        self.collections
            .get(&namespace(database, collection))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn count(&self, database: &str, collection: &str) -> usize {
        self.documents(database, collection).len()
    }
}

impl CollectionStore for MemoryStore {
    fn replace_collection(
        &mut self,
        database: &str,
        collection: &str,
        records: &[RentRecord],
    ) -> Result<usize, StoreError> {
        let docs = self
            .collections
            .entry(namespace(database, collection))
            .or_default();
        docs.clear();
        docs.extend_from_slice(records);
        Ok(docs.len())
    }
}
