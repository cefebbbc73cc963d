//! Store module - full-replace persistence of the cleaned dataset

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::data::RentRecord;
use thiserror::Error;

/// Default MongoDB endpoint.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE: &str = "loyers";
pub const DEFAULT_COLLECTION: &str = "paris_2024";

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot reach document store at {target}: {source}")]
    Connection {
        target: String,
        #[source]
        source: BoxError,
    },
    #[error("Write to {namespace} rejected: {source}")]
    Write {
        namespace: String,
        #[source]
        source: BoxError,
    },
}

/// A backend holding one document per record in named collections.
pub trait CollectionStore {
    /// Delete every document of `database.collection`, then insert `records`.
    ///
    /// Returns the number of inserted documents.
    fn replace_collection(
        &mut self,
        database: &str,
        collection: &str,
        records: &[RentRecord],
    ) -> Result<usize, StoreError>;
}

/// Connect to the MongoDB endpoint at `connection_target` and replace the collection.
pub fn load(
    dataset: &[RentRecord],
    connection_target: &str,
    database_name: &str,
    collection_name: &str,
) -> Result<usize, StoreError> {
    let mut store = MongoStore::connect(connection_target)?;
    load_into(&mut store, dataset, database_name, collection_name)
}

/// Replace `database_name.collection_name` in an already opened store.
pub fn load_into<S: CollectionStore + ?Sized>(
    store: &mut S,
    dataset: &[RentRecord],
    database_name: &str,
    collection_name: &str,
) -> Result<usize, StoreError> {
    let inserted = store.replace_collection(database_name, collection_name, dataset)?;
    log::info!(
        "{} documents inserted into {}.{}",
        inserted,
        database_name,
        collection_name
    );
    Ok(inserted)
}

pub(crate) fn namespace(database: &str, collection: &str) -> String {
    format!("{}.{}", database, collection)
}
