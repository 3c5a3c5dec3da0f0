// src/domain/auctions.rs
use chrono::{DateTime, Utc};
use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type AuctionId = String;

/// Condition of the product being auctioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl ProductCondition {
    pub fn as_u8(self) -> u8 {
        match self {
            ProductCondition::New => 1,
            ProductCondition::Used => 2,
            ProductCondition::Refurbished => 3,
        }
    }

    pub fn from_u8(value: u8) -> Result<Self, String> {
        match value {
            1 => Ok(ProductCondition::New),
            2 => Ok(ProductCondition::Used),
            3 => Ok(ProductCondition::Refurbished),
            other => Err(format!("Unknown product condition: {}", other)),
        }
    }
}

impl fmt::Display for ProductCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCondition::New => write!(f, "New"),
            ProductCondition::Used => write!(f, "Used"),
            ProductCondition::Refurbished => write!(f, "Refurbished"),
        }
    }
}

impl Serialize for ProductCondition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: serde::Serializer {
        serializer.serialize_u8(self.as_u8())
    }
}
impl<'de> Deserialize<'de> for ProductCondition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: serde::Deserializer<'de> {
        let value = u8::deserialize(deserializer)?;
        ProductCondition::from_u8(value).map_err(serde::de::Error::custom)
    }
}

/// Status of an auction. The only transition is Active -> Completed;
/// a completed auction never becomes active again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionStatus {
    Active,
    Completed,
}

impl AuctionStatus {
    pub fn as_u8(self) -> u8 {
        match self {
            AuctionStatus::Active => 0,
            AuctionStatus::Completed => 1,
        }
    }

    pub fn from_u8(value: u8) -> Result<Self, String> {
        match value {
            0 => Ok(AuctionStatus::Active),
            1 => Ok(AuctionStatus::Completed),
            other => Err(format!("Unknown auction status: {}", other)),
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionStatus::Active => write!(f, "Active"),
            AuctionStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl Serialize for AuctionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: serde::Serializer {
        serializer.serialize_u8(self.as_u8())
    }
}
impl<'de> Deserialize<'de> for AuctionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: serde::Deserializer<'de> {
        let value = u8::deserialize(deserializer)?;
        AuctionStatus::from_u8(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub id: AuctionId,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
    pub status: AuctionStatus,
    /// When the auction was accepted. `None` means "assign at persistence".
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Auction {
    pub fn new(
        product_name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        condition: ProductCondition,
    ) -> Self {
        Auction {
            id: Uuid::new_v4().to_string(),
            product_name: product_name.into(),
            category: category.into(),
            description: description.into(),
            condition,
            status: AuctionStatus::Active,
            created_at: None,
        }
    }
}
