//! Wire types for order requests and storage-id allocation.

use crate::domain::payload::FromPayload;
use crate::shared::{OrderType, TradeChannel};
use serde::{Deserialize, Serialize};

// ─── Storage id ──────────────────────────────────────────────────────────────

/// Next free storage slot for a sell token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageId {
    pub order_id: u64,
    pub offchain_id: u64,
}

impl StorageId {
    /// Gap between consecutive ids handed out by the relayer.
    pub const STEP: u64 = 2;

    /// The slot after this one, for placing several orders without asking
    /// the relayer each time. `None` once either id would overflow.
    pub fn next(&self) -> Option<Self> {
        Some(Self {
            order_id: self.order_id.checked_add(Self::STEP)?,
            offchain_id: self.offchain_id.checked_add(Self::STEP)?,
        })
    }
}

impl FromPayload for StorageId {
    const NAME: &'static str = "StorageId";
}

// ─── Order submission ────────────────────────────────────────────────────────

/// A token id paired with an amount (decimal string, smallest units).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub token_id: u32,
    pub volume: String,
}

/// Body of `POST /api/v3/order`.
///
/// Orders must be EdDSA-signed by the account's L2 key, which this SDK does
/// not do; see [`Orders::submit`](super::client::Orders::submit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    pub exchange: String,
    pub account_id: u64,
    pub storage_id: u64,
    pub sell_token: Token,
    pub buy_token: Token,
    pub all_or_none: bool,
    pub fill_amount_b_or_s: bool,
    /// Expiry, epoch seconds.
    pub valid_until: i64,
    /// Ten-thousandths, 1..=63.
    pub max_fee_bips: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eddsa_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_channel: Option<TradeChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate: Option<String>,
}
