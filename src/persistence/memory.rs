// src/persistence/memory.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::collection::AuctionCollection;
use super::document::{AuctionDocument, AuctionFilter, AuctionUpdate, PersistenceError};

/// In-memory auction collection.
///
/// All operations run under a single mutex, which gives `update_many` the
/// required all-or-nothing semantics with respect to filter evaluation.
#[derive(Debug, Default)]
pub struct InMemoryCollection {
    documents: Mutex<HashMap<String, AuctionDocument>>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        InMemoryCollection::default()
    }

    pub fn from_documents(documents: Vec<AuctionDocument>) -> Self {
        let documents = documents
            .into_iter()
            .map(|document| (document.id.clone(), document))
            .collect();
        InMemoryCollection {
            documents: Mutex::new(documents),
        }
    }

    /// Snapshot of every stored document.
    pub fn documents(&self) -> Result<Vec<AuctionDocument>, PersistenceError> {
        let documents = self.lock()?;
        Ok(documents.values().cloned().collect())
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, AuctionDocument>>, PersistenceError>
    {
        self.documents
            .lock()
            .map_err(|_| PersistenceError::Storage("collection lock poisoned".to_string()))
    }
}

#[async_trait]
impl AuctionCollection for InMemoryCollection {
    async fn insert(&self, document: AuctionDocument) -> Result<(), PersistenceError> {
        let mut documents = self.lock()?;
        if documents.contains_key(&document.id) {
            return Err(PersistenceError::DuplicateId(document.id));
        }
        documents.insert(document.id.clone(), document);
        Ok(())
    }

    async fn update_many(
        &self,
        filter: AuctionFilter,
        update: AuctionUpdate,
    ) -> Result<u64, PersistenceError> {
        let mut documents = self.lock()?;

        // Matches are decided before any document is mutated, so the filter
        // never observes its own updates.
        let matched: Vec<String> = documents
            .values()
            .filter(|document| filter.matches(document))
            .map(|document| document.id.clone())
            .collect();

        let mut modified = 0;
        for id in matched {
            if let Some(document) = documents.get_mut(&id) {
                let before = document.clone();
                update.apply(document);
                if *document != before {
                    modified += 1;
                }
            }
        }

        Ok(modified)
    }

    async fn find(&self, id: &str) -> Result<Option<AuctionDocument>, PersistenceError> {
        let documents = self.lock()?;
        Ok(documents.get(id).cloned())
    }
}
