//! Order book domain: depth snapshots and their price levels.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use crate::domain::payload::FromPayload;
use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "http")]
pub use client::{DepthQuery, Orderbooks};

/// A book level that could not be built from its wire array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookLevelError {
    #[error("Invalid level quantity: {0:?}")]
    InvalidQuantity(String),
    #[error("Empty level {0}")]
    Empty(&'static str),
}

/// One aggregated price level.
///
/// `price`, `size` and `volume` are kept as the relayer's decimal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLevel {
    pub price: String,
    /// Number of orders resting at this price.
    pub quantity: u64,
    pub size: String,
    pub volume: String,
}

impl BookLevel {
    pub fn price_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.price)
    }

    pub fn size_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.size)
    }

    pub fn volume_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.volume)
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>, kind: &str) -> fmt::Result {
        write!(
            f,
            "{} {} @ {} ({} size @ {} volume)",
            self.quantity, kind, self.price, self.size, self.volume
        )
    }
}

/// A sell-side level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "wire::RawLevel", into = "wire::RawLevel")]
pub struct Ask(pub BookLevel);

/// A buy-side level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "wire::RawLevel", into = "wire::RawLevel")]
pub struct Bid(pub BookLevel);

impl Deref for Ask {
    type Target = BookLevel;

    fn deref(&self) -> &BookLevel {
        &self.0
    }
}

impl Deref for Bid {
    type Target = BookLevel;

    fn deref(&self) -> &BookLevel {
        &self.0
    }
}

impl fmt::Display for Ask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f, "asks")
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f, "bids")
    }
}

/// Depth snapshot of one market.
///
/// Levels keep the relayer's order: asks ascending, bids descending by price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub market: String,
    #[serde(with = "serde_util::timestamp_ms")]
    pub timestamp: DateTime<Utc>,
    pub version: u64,
    #[serde(default)]
    pub asks: Vec<Ask>,
    #[serde(default)]
    pub bids: Vec<Bid>,
}

impl OrderBook {
    /// Total number of orders across every level on both sides.
    pub fn len(&self) -> u64 {
        let asks: u64 = self.asks.iter().map(|a| a.quantity).sum();
        let bids: u64 = self.bids.iter().map(|b| b.quantity).sum();
        asks + bids
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn best_ask(&self) -> Option<&Ask> {
        self.asks.first()
    }

    pub fn best_bid(&self) -> Option<&Bid> {
        self.bids.first()
    }

    /// Best ask minus best bid, when both sides are present and parse.
    pub fn spread(&self) -> Option<Decimal> {
        let ask = self.best_ask()?.price_decimal().ok()?;
        let bid = self.best_bid()?.price_decimal().ok()?;
        Some(ask - bid)
    }
}

impl FromPayload for OrderBook {
    const NAME: &'static str = "OrderBook";
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} orders: {} @ {}",
            self.len(),
            self.market,
            self.timestamp
        )
    }
}
