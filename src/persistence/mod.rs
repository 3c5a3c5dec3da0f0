// src/persistence/mod.rs
pub mod closer;
pub mod collection;
pub mod document;
pub mod json_file;
pub mod memory;
pub mod store;
pub mod sweep;

pub use self::collection::AuctionCollection;
pub use self::document::{AuctionDocument, AuctionFilter, AuctionUpdate, PersistenceError};
pub use self::memory::InMemoryCollection;
pub use self::store::AuctionStore;
