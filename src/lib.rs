//! # Loopring SDK
//!
//! An async Rust client for the Loopring relayer REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: the response object model. Key normalization, the
//!    complete/placeholder [`Payload`](domain::payload::Payload) wrapper,
//!    typed orders and order books (always available, no I/O)
//! 2. **HTTP API**: `LoopringHttp`. One GET per call, API key header,
//!    explicit session close
//! 3. **High-Level Client**: `LoopringClient` with nested sub-clients and the
//!    raise/placeholder error-handling mode
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use loopring_sdk::prelude::*;
//!
//! let client = LoopringClient::builder()
//!     .config(Config::from_env()?)
//!     .network(Network::Mainnet)
//!     .build()?;
//!
//! let orders = client
//!     .orders()
//!     .list(&OrdersQuery::new().with_market("LRC-ETH"))
//!     .await?;
//! let book = client.orderbooks().depth(&DepthQuery::new("LRC-ETH")).await?;
//! client.close().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared label enums, key normalization, serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Account id, API key and endpoint configuration.
pub mod config;

/// Network URL constants and REST paths.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client and session lifecycle.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// The primary entry point, `LoopringClient`.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared labels
    pub use crate::shared::{OrderStatus, OrderType, Side, TradeChannel};

    // Domain types: orders
    pub use crate::domain::order::{
        Order, OrderList, PartialOrder, StorageId, SubmitOrderRequest, Token, Transfer, Validity,
        Volume,
    };

    // Domain types: order book, relayer
    pub use crate::domain::orderbook::{Ask, Bid, BookLevel, OrderBook};
    pub use crate::domain::relayer::RelayerTime;

    // Payload wrapper
    pub use crate::domain::payload::{FromPayload, Payload, RawPayload};

    // Errors
    pub use crate::error::{ApiError, ConfigError, ErrorCode, HttpError, ObjectError, SdkError};

    // Config + network
    pub use crate::config::Config;
    pub use crate::network::{Network, MAINNET_API_URL, TESTNET_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        LoopringClient, LoopringClientBuilder, OrderbooksClient, OrdersClient, RelayerClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::order::OrdersQuery;
    #[cfg(feature = "http")]
    pub use crate::domain::orderbook::DepthQuery;
}
