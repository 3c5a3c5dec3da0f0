// src/persistence/collection.rs
use async_trait::async_trait;

use super::document::{AuctionDocument, AuctionFilter, AuctionUpdate, PersistenceError};

/// Storage seam for auction documents.
///
/// The store only requires insert and filtered bulk update; concrete engines
/// (in-memory, document databases) implement this trait.
#[async_trait]
pub trait AuctionCollection: Send + Sync {
    /// Insert a new document keyed by its id. Duplicate ids are rejected
    /// with [`PersistenceError::DuplicateId`].
    async fn insert(&self, document: AuctionDocument) -> Result<(), PersistenceError>;

    /// Apply `update` to every document matching `filter` in one bulk
    /// operation and return the number of documents modified.
    ///
    /// The filter is evaluated against a consistent snapshot: once a
    /// document's fields change as part of this call, the filter is never
    /// re-evaluated against it.
    async fn update_many(
        &self,
        filter: AuctionFilter,
        update: AuctionUpdate,
    ) -> Result<u64, PersistenceError>;

    /// Look a single document up by id.
    async fn find(&self, id: &str) -> Result<Option<AuctionDocument>, PersistenceError>;
}
