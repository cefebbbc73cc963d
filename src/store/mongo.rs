//! MongoDB backend (synchronous driver API).

use super::{namespace, CollectionStore, StoreError};
use crate::data::RentRecord;
use mongodb::bson::doc;
use mongodb::sync::Client;

pub struct MongoStore {
    client: Client,
    target: String,
}

impl MongoStore {
    /// Parse `uri` and ping the server so an unreachable endpoint fails here.
    pub fn connect(uri: &str) -> Result<Self, StoreError> {
        let connection_error = |e: mongodb::error::Error| StoreError::Connection {
            target: uri.to_string(),
            source: Box::new(e),
        };

        let client = Client::with_uri_str(uri).map_err(connection_error)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .run()
            .map_err(connection_error)?;

        log::debug!("Connected to {}", uri);
        Ok(Self {
            client,
            target: uri.to_string(),
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl CollectionStore for MongoStore {
    fn replace_collection(
        &mut self,
        database: &str,
        collection: &str,
        records: &[RentRecord],
    ) -> Result<usize, StoreError> {
        let ns = namespace(database, collection);
        let write_error = |e: mongodb::error::Error| StoreError::Write {
            namespace: ns.clone(),
            source: Box::new(e),
        };

        let coll = self
            .client
            .database(database)
            .collection::<RentRecord>(collection);

        let deleted = coll.delete_many(doc! {}).run().map_err(write_error)?;
        log::debug!("Deleted {} documents from {}", deleted.deleted_count, ns);

        // insert_many rejects an empty batch
        if records.is_empty() {
            return Ok(0);
        }

        let inserted = coll.insert_many(records).run().map_err(write_error)?;
        Ok(inserted.inserted_ids.len())
    }
}
