// src/persistence/closer.rs
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use log::{info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::collection::AuctionCollection;
use super::sweep;

/// Fixed period of the background sweep loop. Deliberately decoupled from
/// the configured auction interval: the interval says how long auctions
/// live, the tick says how often expiry is checked.
pub const SWEEP_TICK: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloserState {
    Running,
    Stopping,
    Stopped,
}

/// Background task that periodically closes expired auctions.
///
/// Spawned in the Running state. `stop` signals cancellation and joins the
/// task; there is no way back to Running, a new store instance is required
/// to run a closer again.
pub struct AuctionCloser {
    stop: watch::Sender<bool>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl AuctionCloser {
    pub fn spawn(collection: Arc<dyn AuctionCollection>, interval: Duration) -> Self {
        let (stop, mut stopped) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(SWEEP_TICK);
            // The first tick of a tokio interval resolves immediately.
            ticker.tick().await;

            info!("Starting auction closer task");

            // Initial check, so auctions already expired at startup (e.g.
            // after a restart) are closed promptly instead of waiting a
            // full period.
            sweep::sweep_expired(collection.as_ref(), Utc::now(), interval).await;

            loop {
                tokio::select! {
                    _ = stopped.changed() => {
                        info!("Stopping auction closer task");
                        return;
                    }
                    _ = ticker.tick() => {
                        sweep::sweep_expired(collection.as_ref(), Utc::now(), interval).await;
                    }
                }
            }
        });

        AuctionCloser {
            stop,
            task: Mutex::new(Some(task)),
        }
    }

    /// True until shutdown has been requested.
    pub fn is_running(&self) -> bool {
        !*self.stop.borrow()
    }

    pub fn state(&self) -> CloserState {
        let joined = self.task.lock().map(|slot| slot.is_none()).unwrap_or(true);
        if joined {
            CloserState::Stopped
        } else if *self.stop.borrow() {
            CloserState::Stopping
        } else {
            CloserState::Running
        }
    }

    /// Signal the loop to stop and wait for the task to exit.
    ///
    /// A sweep already in flight runs to completion before the task
    /// observes the signal. Safe to call more than once; later calls find
    /// no task left to join and return immediately.
    pub async fn stop(&self) {
        let _ = self.stop.send(true);

        // Take the handle under the lock, join outside of it.
        let task = match self.task.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };

        if let Some(task) = task {
            if let Err(err) = task.await {
                warn!("Auction closer task ended abnormally: {}", err);
            }
        }
    }
}
