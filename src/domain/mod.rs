// src/domain/mod.rs
pub mod auctions;

pub use self::auctions::*;
