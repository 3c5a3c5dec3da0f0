// src/persistence/sweep.rs
use chrono::{DateTime, Duration, Utc};
use log::{error, info};

use crate::domain::AuctionStatus;

use super::collection::AuctionCollection;
use super::document::{AuctionFilter, AuctionUpdate};

/// Filter selecting auctions that are still active but whose active window
/// had already elapsed at `now`.
pub fn expired_filter(now: DateTime<Utc>, interval: Duration) -> AuctionFilter {
    let cutoff = now - interval;
    AuctionFilter {
        status: Some(AuctionStatus::Active),
        timestamp_lte: Some(cutoff.timestamp()),
    }
}

/// Update transitioning matched auctions to completed.
pub fn complete_update() -> AuctionUpdate {
    AuctionUpdate {
        status: Some(AuctionStatus::Completed),
    }
}

/// Run one sweep: mark every expired active auction completed in a single
/// bulk update, and return the number of auctions transitioned.
///
/// Overlapping sweeps are safe: both filter on active status and the cutoff,
/// so they either transition disjoint sets or one of them matches nothing.
/// Failures are logged and swallowed; the expired-but-active condition
/// persists, so the next scheduled tick retries implicitly.
pub async fn sweep_expired(
    collection: &dyn AuctionCollection,
    now: DateTime<Utc>,
    interval: Duration,
) -> u64 {
    match collection
        .update_many(expired_filter(now, interval), complete_update())
        .await
    {
        Ok(modified) => {
            if modified > 0 {
                info!("Closed expired auctions - modified count: {}", modified);
            }
            modified
        }
        Err(err) => {
            error!("Error trying to close expired auctions: {}", err);
            0
        }
    }
}
