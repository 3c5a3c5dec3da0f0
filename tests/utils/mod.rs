#![allow(dead_code)]
use std::future::Future;
use std::time::Duration as StdDuration;

use auction_store::domain::{Auction, AuctionStatus, ProductCondition};
use auction_store::persistence::AuctionDocument;
use chrono::{DateTime, Duration, Utc};
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Sample data for tests
pub fn sample_auction(id: &str) -> Auction {
    Auction {
        id: id.to_string(),
        product_name: "Test Product".to_string(),
        category: "Test Category".to_string(),
        description: "Test Description".to_string(),
        condition: ProductCondition::New,
        status: AuctionStatus::Active,
        created_at: None,
    }
}

pub fn sample_auction_created_at(id: &str, created_at: DateTime<Utc>) -> Auction {
    Auction {
        created_at: Some(created_at),
        ..sample_auction(id)
    }
}

pub fn sample_document(id: &str, status: AuctionStatus, created_at: DateTime<Utc>) -> AuctionDocument {
    AuctionDocument {
        id: id.to_string(),
        product_name: "Test Product".to_string(),
        category: "Test Category".to_string(),
        description: "Test Description".to_string(),
        condition: ProductCondition::Used,
        status,
        timestamp: created_at.timestamp(),
    }
}

pub fn seconds_ago(seconds: i64) -> DateTime<Utc> {
    Utc::now() - Duration::seconds(seconds)
}

/// Poll `condition` until it holds or `timeout` elapses.
pub async fn wait_until<F, Fut>(timeout: StdDuration, mut condition: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if condition().await {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(StdDuration::from_millis(20)).await;
    }
}
