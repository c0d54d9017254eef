//! Wire field-name normalization.
//!
//! The relayer speaks camelCase (`orderHash`, `tradeChannel`); every domain
//! type in this crate is keyed by snake_case. Responses are normalized once,
//! key by key, before any typed field is populated.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::ObjectError;

/// Every wire field name the SDK reads or sends.
pub const WIRE_FIELDS: &[&str] = &[
    // request parameters
    "accountId",
    "end",
    "level",
    "limit",
    "market",
    "offset",
    "orderHash",
    "orderTypes",
    "sellTokenId",
    "side",
    "start",
    "status",
    "tradeChannels",
    // order payloads
    "baseAmount",
    "baseFilled",
    "clientOrderId",
    "fee",
    "hash",
    "isIdempotent",
    "orderType",
    "price",
    "quoteAmount",
    "quoteFilled",
    "tradeChannel",
    "validity",
    "volumes",
    "orders",
    "totalNum",
    // storage id
    "offchainId",
    "orderId",
    // depth + relayer time
    "asks",
    "bids",
    "timestamp",
    "version",
    // error envelope
    "code",
    "message",
    "resultInfo",
];

/// Converts a camelCase name to snake_case.
///
/// Every ASCII uppercase letter becomes `_` + its lowercase form, except at the
/// start of the name or directly after an existing `_`. Names that are already
/// snake_case come back unchanged.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Converts a snake_case name back to camelCase.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' && !out.is_empty() {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Returns a copy of `map` with every object key (at any depth) in snake_case.
///
/// Fails if two distinct keys of the same object normalize to the same name.
pub fn normalize_keys(map: &Map<String, Value>) -> Result<Map<String, Value>, ObjectError> {
    let mut out = Map::with_capacity(map.len());
    let mut origin: BTreeMap<String, &str> = BTreeMap::new();

    for (key, value) in map {
        let normalized = to_snake_case(key);
        if let Some(first) = origin.insert(normalized.clone(), key) {
            return Err(ObjectError::FieldCollision {
                first: first.to_string(),
                second: key.clone(),
                normalized,
            });
        }
        out.insert(normalized, normalize_value(value)?);
    }

    Ok(out)
}

fn normalize_value(value: &Value) -> Result<Value, ObjectError> {
    Ok(match value {
        Value::Object(map) => Value::Object(normalize_keys(map)?),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(normalize_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        other => other.clone(),
    })
}
