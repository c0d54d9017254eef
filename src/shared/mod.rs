//! Shared enums and utilities used across all domain modules.
//!
//! The label enums serialize to exactly the strings the relayer sends and
//! parse case-insensitively, so `"mIxEd"` and `"MIXED"` name the same
//! [`TradeChannel`].

pub mod case;
pub mod serde_util;

pub use case::{normalize_keys, to_camel_case, to_snake_case, WIRE_FIELDS};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a label does not name any variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a label enum with its wire strings.
///
/// Generates `as_str`, `ALL`, case-insensitive `FromStr`, `parse_list`,
/// `Display`, and string-based serde impls.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact label used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            /// Parses a comma-separated list such as `"cancelling, cancelled"`.
            pub fn parse_list(s: &str) -> Result<Vec<Self>, ParseEnumError> {
                s.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(|part| part.parse::<Self>())
                    .collect()
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Lifecycle label of an order.
    OrderStatus, "order status" {
        Processing => "processing",
        Processed => "processed",
        Failed => "failed",
        Cancelled => "cancelled",
        Cancelling => "cancelling",
        Expired => "expired",
        Waiting => "waiting",
    }
}

wire_enum! {
    /// How an order interacts with the book.
    OrderType, "order type" {
        LimitOrder => "LIMIT_ORDER",
        MakerOnly => "MAKER_ONLY",
        TakerOnly => "TAKER_ONLY",
        Amm => "AMM",
    }
}

wire_enum! {
    /// Order side.
    Side, "side" {
        Buy => "BUY",
        Sell => "SELL",
    }
}

wire_enum! {
    /// Where a trade executed: the order book, an AMM pool, or both.
    TradeChannel, "trade channel" {
        OrderBook => "ORDER_BOOK",
        AmmPool => "AMM_POOL",
        Mixed => "MIXED",
    }
}

impl OrderStatus {
    /// Whether the relayer can still change this order.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Processing | Self::Waiting | Self::Cancelling)
    }
}
