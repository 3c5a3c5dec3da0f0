// src/lib.rs
pub mod config;
pub mod domain;
pub mod persistence;

pub use config::resolve_interval;
pub use domain::*;
pub use persistence::store::AuctionStore;
