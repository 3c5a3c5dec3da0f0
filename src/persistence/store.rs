// src/persistence/store.rs
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::config;
use crate::domain::Auction;

use super::closer::{AuctionCloser, CloserState};
use super::collection::AuctionCollection;
use super::document::{AuctionDocument, PersistenceError};
use super::sweep;

/// Store of auction records with automatic closing of expired auctions.
///
/// Construction starts one background closer task; [`AuctionStore::stop`]
/// shuts it down. The store exclusively owns the closer's lifetime and
/// hands the collection handle to the sweeps it schedules.
pub struct AuctionStore {
    collection: Arc<dyn AuctionCollection>,
    interval: Duration,
    closer: AuctionCloser,
}

impl AuctionStore {
    /// Create a store, resolving the auction active-duration from its raw
    /// setting value (see [`config::resolve_interval`]) and starting the
    /// background closer.
    pub fn new(collection: Arc<dyn AuctionCollection>, interval_setting: Option<&str>) -> Self {
        AuctionStore::with_interval(collection, config::resolve_interval(interval_setting))
    }

    /// Create a store with an already-resolved active-duration.
    pub fn with_interval(collection: Arc<dyn AuctionCollection>, interval: Duration) -> Self {
        let closer = AuctionCloser::spawn(Arc::clone(&collection), interval);
        AuctionStore {
            collection,
            interval,
            closer,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn lifecycle_state(&self) -> CloserState {
        self.closer.state()
    }

    /// Persist a new auction.
    ///
    /// A missing `created_at` is assigned the current time, and the record
    /// is always stored active whatever status the caller supplied, so a
    /// pre-completed auction can never be created. A successful write also
    /// triggers an immediate out-of-band sweep, shortening the staleness
    /// window for auctions whose expiry is already due.
    pub async fn create(&self, auction: Auction) -> Result<(), PersistenceError> {
        let created_at = auction.created_at.unwrap_or_else(Utc::now);
        let document = AuctionDocument::from_auction(&auction, created_at);
        self.collection.insert(document).await?;

        // Fire and forget: the caller neither waits for nor observes the
        // sweep's outcome. Not scheduled once shutdown has been requested.
        if self.closer.is_running() {
            let collection = Arc::clone(&self.collection);
            let interval = self.interval;
            tokio::spawn(async move {
                sweep::sweep_expired(collection.as_ref(), Utc::now(), interval).await;
            });
        }

        Ok(())
    }

    /// Close every active auction whose active window had elapsed at `now`
    /// and return the number of auctions transitioned. Store-level failures
    /// are logged and yield 0, never an error.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> u64 {
        sweep::sweep_expired(self.collection.as_ref(), now, self.interval).await
    }

    /// Shut the background closer down and wait for its task to exit. No
    /// sweep runs after this returns. Idempotent.
    pub async fn stop(&self) {
        self.closer.stop().await;
    }
}
