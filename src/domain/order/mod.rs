//! Order domain: transfers, partial orders, fully resolved orders.
//!
//! The three shapes are flat structs rather than a hierarchy: each carries
//! exactly the fields that are meaningful for it. In particular a resolved
//! [`Order`] has no `is_idempotent` flag.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::payload::FromPayload;
use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use crate::shared::{OrderStatus, OrderType, Side, TradeChannel};
#[cfg(feature = "http")]
pub use client::{Orders, OrdersQuery};
pub use wire::{StorageId, SubmitOrderRequest, Token};

// ─── Transfer ────────────────────────────────────────────────────────────────

/// Base acknowledgement shape: identifier, idempotency flag, and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub hash: String,
    pub is_idempotent: bool,
    pub status: OrderStatus,
}

impl FromPayload for Transfer {
    const NAME: &'static str = "Transfer";
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}

// ─── PartialOrder ────────────────────────────────────────────────────────────

/// Acknowledgement returned when an order is accepted for processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialOrder {
    pub hash: String,
    #[serde(default)]
    pub client_order_id: String,
    pub is_idempotent: bool,
    pub status: OrderStatus,
}

impl PartialOrder {
    /// The transfer view of this acknowledgement.
    pub fn transfer(&self) -> Transfer {
        Transfer {
            hash: self.hash.clone(),
            is_idempotent: self.is_idempotent,
            status: self.status,
        }
    }
}

impl FromPayload for PartialOrder {
    const NAME: &'static str = "PartialOrder";
}

impl fmt::Display for PartialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}

// ─── Validity / Volume ───────────────────────────────────────────────────────

/// Window in which an order may be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    #[serde(with = "serde_util::timestamp_secs")]
    pub start: DateTime<Utc>,
    #[serde(with = "serde_util::timestamp_secs")]
    pub end: DateTime<Utc>,
}

impl Validity {
    /// Whether `at` falls inside the window (both ends inclusive).
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Amounts requested and filled, as the relayer's decimal strings.
///
/// The strings are kept verbatim; the `*_decimal` accessors parse them
/// exactly when arithmetic is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub base_amount: String,
    pub base_filled: String,
    pub fee: String,
    pub quote_amount: String,
    pub quote_filled: String,
}

impl Volume {
    pub fn base_amount_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.base_amount)
    }

    pub fn base_filled_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.base_filled)
    }

    pub fn fee_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.fee)
    }

    pub fn quote_amount_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.quote_amount)
    }

    pub fn quote_filled_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.quote_filled)
    }

    /// Unfilled base amount.
    pub fn base_remaining(&self) -> Result<Decimal, rust_decimal::Error> {
        Ok(self.base_amount_decimal()? - self.base_filled_decimal()?)
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A fully resolved order.
///
/// `is_idempotent` only applies to acknowledgements and does not exist here:
///
/// ```compile_fail
/// # use loopring_sdk::domain::order::Order;
/// fn idempotent(order: &Order) -> bool {
///     order.is_idempotent
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub hash: String,
    #[serde(default)]
    pub client_order_id: String,
    pub market: String,
    pub order_type: OrderType,
    /// Decimal string.
    pub price: String,
    pub side: Side,
    pub status: OrderStatus,
    pub trade_channel: TradeChannel,
    pub validity: Validity,
    pub volumes: Volume,
    /// Fields this SDK does not model, keyed by their snake_case name.
    ///
    /// Never holds `is_idempotent`.
    #[serde(flatten, deserialize_with = "deserialize_extra")]
    pub extra: BTreeMap<String, Value>,
}

/// Keys that belong to acknowledgements only and are dropped from [`Order::extra`].
const ACKNOWLEDGEMENT_FIELDS: &[&str] = &["is_idempotent"];

fn deserialize_extra<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut extra = BTreeMap::<String, Value>::deserialize(deserializer)?;
    for key in ACKNOWLEDGEMENT_FIELDS {
        extra.remove(*key);
    }
    Ok(extra)
}

impl Order {
    pub fn price_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.price)
    }
}

impl FromPayload for Order {
    const NAME: &'static str = "Order";
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}

// ─── OrderList ───────────────────────────────────────────────────────────────

/// One page of the order listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderList {
    #[serde(default)]
    pub total_num: u64,
    pub orders: Vec<Order>,
}

impl OrderList {
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }
}

impl IntoIterator for OrderList {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

impl FromPayload for OrderList {
    const NAME: &'static str = "OrderList";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::Payload;
    use serde_json::{json, Map};

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn order_json() -> Value {
        json!({
            "hash": "0x1f8b",
            "clientOrderId": "client-7",
            "side": "BUY",
            "market": "LRC-ETH",
            "price": "0.000305",
            "volumes": {
                "baseAmount": "1000000000000000000000",
                "quoteAmount": "305000000000000000",
                "baseFilled": "250000000000000000000",
                "quoteFilled": "76250000000000000",
                "fee": "0.0015"
            },
            "validity": {"start": 1567053142, "end": 1569645142},
            "orderType": "LIMIT_ORDER",
            "tradeChannel": "ORDER_BOOK",
            "status": "processing"
        })
    }

    #[test]
    fn test_order_from_full_payload() {
        let payload = Payload::<Order>::parse(object(order_json())).unwrap();
        let order = payload.as_complete().unwrap();

        assert_eq!(order.hash, "0x1f8b");
        assert_eq!(order.client_order_id, "client-7");
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.market, "LRC-ETH");
        assert_eq!(order.price, "0.000305");
        assert_eq!(order.order_type, OrderType::LimitOrder);
        assert_eq!(order.trade_channel, TradeChannel::OrderBook);
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.validity.start.timestamp(), 1567053142);
        assert_eq!(order.validity.end.timestamp(), 1569645142);
        assert_eq!(order.volumes.base_amount, "1000000000000000000000");
        assert_eq!(order.volumes.quote_amount, "305000000000000000");
        assert_eq!(order.volumes.base_filled, "250000000000000000000");
        assert_eq!(order.volumes.quote_filled, "76250000000000000");
        assert_eq!(order.volumes.fee, "0.0015");
        assert!(order.extra.is_empty());
        assert_eq!(payload.to_string(), "0x1f8b");
    }

    #[test]
    fn test_order_keeps_unmodelled_fields() {
        let mut body = order_json();
        body["poolAddress"] = json!("0xpool");
        let order = Payload::<Order>::parse(object(body))
            .unwrap()
            .into_complete()
            .unwrap();
        assert_eq!(order.extra.get("pool_address"), Some(&json!("0xpool")));
    }

    #[test]
    fn test_order_drops_idempotency_flag() {
        let mut body = order_json();
        body["isIdempotent"] = json!(true);
        body["poolAddress"] = json!("0xpool");
        let payload = Payload::<Order>::parse(object(body)).unwrap();
        let order = payload.as_complete().unwrap();

        assert!(order.extra.get("is_idempotent").is_none());
        assert_eq!(order.extra.get("pool_address"), Some(&json!("0xpool")));
        assert_eq!(payload.raw().get("isIdempotent"), Some(&json!(true)));

        let value = serde_json::to_value(order).unwrap();
        assert!(value.get("is_idempotent").is_none());
    }

    #[test]
    fn test_order_placeholder() {
        let payload = Payload::<Order>::parse(object(json!({"hash": "0x1"}))).unwrap();
        assert!(payload.as_complete().is_none());
        assert_eq!(payload.to_string(), "Incomplete Order.");
        assert!(payload.into_complete().is_err());
    }

    #[test]
    fn test_order_missing_required_field_is_malformed() {
        let mut body = order_json();
        body.as_object_mut().unwrap().remove("validity");
        assert!(Payload::<Order>::parse(object(body)).is_err());
    }

    #[test]
    fn test_order_serializes_snake_case_fields() {
        let order = Payload::<Order>::parse(object(order_json()))
            .unwrap()
            .into_complete()
            .unwrap();
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["client_order_id"], "client-7");
        assert_eq!(value["validity"]["start"], 1567053142);
        assert_eq!(value["volumes"]["quote_filled"], "76250000000000000");
    }

    #[test]
    fn test_partial_order_and_transfer() {
        let body = json!({
            "hash": "0xabc",
            "clientOrderId": "c-1",
            "isIdempotent": false,
            "status": "processing"
        });
        let partial = Payload::<PartialOrder>::parse(object(body.clone()))
            .unwrap()
            .into_complete()
            .unwrap();
        assert_eq!(partial.client_order_id, "c-1");
        assert!(!partial.is_idempotent);
        assert_eq!(partial.to_string(), "0xabc");

        let transfer = Payload::<Transfer>::parse(object(body))
            .unwrap()
            .into_complete()
            .unwrap();
        assert_eq!(transfer, partial.transfer());
    }

    #[test]
    fn test_partial_order_error_response() {
        let body = json!({"resultInfo": {"code": 100001, "message": "invalid argument"}});
        let payload = Payload::<PartialOrder>::parse(object(body)).unwrap();
        assert_eq!(payload.to_string(), "Incomplete PartialOrder.");
        assert_eq!(payload.raw().error().unwrap().message, "invalid argument");
    }

    #[test]
    fn test_volume_decimals() {
        let volume = Volume {
            base_amount: "10.5".to_string(),
            base_filled: "2.25".to_string(),
            fee: "0.001".to_string(),
            quote_amount: "21".to_string(),
            quote_filled: "4.5".to_string(),
        };
        assert_eq!(volume.base_remaining().unwrap(), Decimal::new(825, 2));
        assert_eq!(volume.fee_decimal().unwrap(), Decimal::new(1, 3));
        assert!(Volume {
            fee: "n/a".to_string(),
            ..volume
        }
        .fee_decimal()
        .is_err());
    }

    #[test]
    fn test_validity_contains() {
        let validity: Validity =
            serde_json::from_value(json!({"start": 100, "end": 200})).unwrap();
        let at = DateTime::<Utc>::from_timestamp(150, 0).unwrap();
        assert!(validity.contains(at));
        assert!(!validity.contains(DateTime::<Utc>::from_timestamp(201, 0).unwrap()));
    }

    #[test]
    fn test_order_list() {
        let body = json!({"totalNum": 1, "orders": [order_json()]});
        let list = Payload::<OrderList>::parse(object(body))
            .unwrap()
            .into_complete()
            .unwrap();
        assert_eq!(list.total_num, 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().unwrap().market, "LRC-ETH");
    }
}
