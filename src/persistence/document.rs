// src/persistence/document.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Auction, AuctionStatus, ProductCondition};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Auction already exists: {0}")]
    DuplicateId(String),

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failure: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Persisted shape of an auction record.
///
/// Enum columns are stored as small integers and `timestamp` as seconds since
/// the Unix epoch rather than a structured date type, for storage-engine
/// portability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
    pub status: AuctionStatus,
    pub timestamp: i64,
}

impl AuctionDocument {
    /// Map a domain auction onto its persisted shape.
    ///
    /// The stored status is always active, whatever the caller supplied.
    pub fn from_auction(auction: &Auction, created_at: DateTime<Utc>) -> Self {
        AuctionDocument {
            id: auction.id.clone(),
            product_name: auction.product_name.clone(),
            category: auction.category.clone(),
            description: auction.description.clone(),
            condition: auction.condition,
            status: AuctionStatus::Active,
            timestamp: created_at.timestamp(),
        }
    }
}

/// Conjunctive filter over auction documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuctionFilter {
    pub status: Option<AuctionStatus>,
    pub timestamp_lte: Option<i64>,
}

impl AuctionFilter {
    pub fn matches(&self, document: &AuctionDocument) -> bool {
        if let Some(status) = self.status {
            if document.status != status {
                return false;
            }
        }
        if let Some(cutoff) = self.timestamp_lte {
            if document.timestamp > cutoff {
                return false;
            }
        }
        true
    }
}

/// Partial update applied to every document matched by a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuctionUpdate {
    pub status: Option<AuctionStatus>,
}

impl AuctionUpdate {
    pub fn apply(&self, document: &mut AuctionDocument) {
        if let Some(status) = self.status {
            document.status = status;
        }
    }
}
