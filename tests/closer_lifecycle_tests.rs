use std::sync::Arc;
use std::time::Duration as StdDuration;

use auction_store::domain::AuctionStatus;
use auction_store::persistence::closer::CloserState;
use auction_store::persistence::{AuctionCollection, InMemoryCollection};
use auction_store::AuctionStore;
use chrono::Duration;

mod utils;
use utils::{init_logging, sample_auction_created_at, sample_document, seconds_ago, wait_until};

#[tokio::test]
async fn initial_check_closes_auctions_already_expired_at_startup() {
    init_logging();
    // The document predates the store, as after a crash/restart.
    let collection = Arc::new(InMemoryCollection::from_documents(vec![sample_document(
        "stale",
        AuctionStatus::Active,
        seconds_ago(60),
    )]));

    let store = AuctionStore::with_interval(collection.clone(), Duration::seconds(2));

    let closed = wait_until(StdDuration::from_secs(5), || {
        let collection = collection.clone();
        async move {
            let document = collection.find("stale").await.unwrap().unwrap();
            document.status == AuctionStatus::Completed
        }
    })
    .await;
    assert!(closed, "initial check should close the stale auction");

    store.stop().await;
}

#[tokio::test]
async fn creating_an_already_expired_auction_closes_it_promptly() {
    init_logging();
    let collection = Arc::new(InMemoryCollection::new());
    let store = AuctionStore::with_interval(collection.clone(), Duration::seconds(2));

    // Three seconds old with a two second active window: eligible for
    // closure the moment it is created. The creation-triggered sweep should
    // catch it long before the next periodic tick.
    store
        .create(sample_auction_created_at("imminent", seconds_ago(3)))
        .await
        .unwrap();

    let closed = wait_until(StdDuration::from_secs(5), || {
        let collection = collection.clone();
        async move {
            let document = collection.find("imminent").await.unwrap().unwrap();
            document.status == AuctionStatus::Completed
        }
    })
    .await;
    assert!(closed, "creation-triggered sweep should close the auction");

    store.stop().await;
}

#[tokio::test]
async fn fresh_auctions_stay_active() {
    init_logging();
    let collection = Arc::new(InMemoryCollection::new());
    let store = AuctionStore::with_interval(collection.clone(), Duration::minutes(5));

    store.create(sample_auction_created_at("fresh", seconds_ago(1))).await.unwrap();

    tokio::time::sleep(StdDuration::from_millis(200)).await;
    let document = collection.find("fresh").await.unwrap().unwrap();
    assert_eq!(document.status, AuctionStatus::Active);

    store.stop().await;
}

#[tokio::test]
async fn stop_joins_the_background_task_promptly() {
    init_logging();
    let store = AuctionStore::with_interval(Arc::new(InMemoryCollection::new()), Duration::minutes(5));
    assert_eq!(store.lifecycle_state(), CloserState::Running);

    // The stop signal must wake the loop rather than waiting out the next
    // periodic tick.
    tokio::time::timeout(StdDuration::from_secs(5), store.stop())
        .await
        .expect("stop should not wait for a full tick");

    assert_eq!(store.lifecycle_state(), CloserState::Stopped);
}

#[tokio::test]
async fn stop_is_idempotent() {
    init_logging();
    let store = AuctionStore::with_interval(Arc::new(InMemoryCollection::new()), Duration::minutes(5));

    store.stop().await;
    // A second shutdown finds no task left to join and returns immediately.
    tokio::time::timeout(StdDuration::from_secs(1), store.stop())
        .await
        .expect("second stop should return immediately");

    assert_eq!(store.lifecycle_state(), CloserState::Stopped);
}

#[tokio::test]
async fn no_sweep_runs_after_stop() {
    init_logging();
    let collection = Arc::new(InMemoryCollection::new());
    let store = AuctionStore::with_interval(collection.clone(), Duration::seconds(2));

    store.stop().await;

    // Expired-eligible from the moment it is written, yet nothing may
    // close it once shutdown has completed.
    store
        .create(sample_auction_created_at("late", seconds_ago(30)))
        .await
        .unwrap();

    tokio::time::sleep(StdDuration::from_millis(500)).await;
    let document = collection.find("late").await.unwrap().unwrap();
    assert_eq!(document.status, AuctionStatus::Active);
}
