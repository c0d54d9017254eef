//! Raw response retention and complete/incomplete classification.
//!
//! Every typed response is a [`Payload`]: either a fully-populated value or an
//! explicit placeholder for a failed or partial response. Both variants keep
//! the untouched server body so it can always be inspected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{ApiError, ObjectError, ResultInfo};
use crate::shared::case::normalize_keys;

/// Response types that can be built from a relayer JSON object.
///
/// Implementors deserialize from the snake_case-normalized object.
pub trait FromPayload: DeserializeOwned {
    /// Type name used when rendering placeholders.
    const NAME: &'static str;

    /// Objects with fewer top-level keys than this are placeholders.
    ///
    /// A failed call only carries `resultInfo`, so one key is not enough for
    /// most shapes.
    const MIN_KEYS: usize = 2;
}

// ─── RawPayload ──────────────────────────────────────────────────────────────

/// The JSON object exactly as the relayer sent it (camelCase keys).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPayload(Map<String, Value>);

impl RawPayload {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Looks up a top-level field by its wire name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn result_info(&self) -> Option<ResultInfo> {
        ResultInfo::from_map(&self.0)
    }

    /// The relayer error described by the body, if any.
    pub fn error(&self) -> Option<ApiError> {
        self.result_info()
            .filter(ResultInfo::is_error)
            .map(ApiError::from)
    }

    fn is_placeholder(&self, min_keys: usize) -> bool {
        self.len() < min_keys || self.error().is_some()
    }
}

impl From<Map<String, Value>> for RawPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl fmt::Display for RawPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(json) => f.write_str(&json),
            Err(_) => f.write_str("{..}"),
        }
    }
}

// ─── Payload ─────────────────────────────────────────────────────────────────

/// A typed response, or a placeholder for one that could not be populated.
#[derive(Clone, PartialEq)]
pub enum Payload<T> {
    /// Fully populated value plus the body it came from.
    Complete { value: T, raw: RawPayload },
    /// Error or partial response; only the raw body is available.
    Incomplete(RawPayload),
}

impl<T: FromPayload> Payload<T> {
    /// Classifies and, if complete, populates `T` from a relayer object.
    ///
    /// Classification runs before any field is read, so a malformed body never
    /// yields a half-populated value: it is either a placeholder or an error.
    pub fn parse(map: Map<String, Value>) -> Result<Self, ObjectError> {
        let raw = RawPayload::new(map);

        if raw.is_placeholder(T::MIN_KEYS) {
            tracing::debug!(
                type_name = T::NAME,
                keys = raw.len(),
                "Relayer response is a placeholder"
            );
            return Ok(Payload::Incomplete(raw));
        }

        let normalized = normalize_keys(raw.as_map())?;
        let value = serde_json::from_value::<T>(Value::Object(normalized)).map_err(|source| {
            ObjectError::Malformed {
                type_name: T::NAME,
                source,
            }
        })?;

        Ok(Payload::Complete { value, raw })
    }

    /// Like [`Payload::parse`] but accepts any JSON value.
    ///
    /// Non-object bodies fail with [`ObjectError::NotAnObject`], which carries
    /// the value as received.
    pub fn from_value(value: Value) -> Result<Self, ObjectError> {
        match value {
            Value::Object(map) => Self::parse(map),
            body => Err(ObjectError::NotAnObject {
                type_name: T::NAME,
                body,
            }),
        }
    }

    /// Returns the value, or [`ObjectError::Incomplete`] carrying the raw body.
    pub fn into_complete(self) -> Result<T, ObjectError> {
        match self {
            Payload::Complete { value, .. } => Ok(value),
            Payload::Incomplete(raw) => Err(ObjectError::Incomplete {
                type_name: T::NAME,
                raw,
            }),
        }
    }
}

impl<T> Payload<T> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Payload::Complete { .. })
    }

    pub fn as_complete(&self) -> Option<&T> {
        match self {
            Payload::Complete { value, .. } => Some(value),
            Payload::Incomplete(_) => None,
        }
    }

    /// The body as received, for both variants.
    pub fn raw(&self) -> &RawPayload {
        match self {
            Payload::Complete { raw, .. } | Payload::Incomplete(raw) => raw,
        }
    }

    pub fn into_raw(self) -> RawPayload {
        match self {
            Payload::Complete { raw, .. } | Payload::Incomplete(raw) => raw,
        }
    }

    pub fn result_info(&self) -> Option<ResultInfo> {
        self.raw().result_info()
    }
}

impl<T: FromPayload + fmt::Display> fmt::Display for Payload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Complete { value, .. } => fmt::Display::fmt(value, f),
            Payload::Incomplete(_) => write!(f, "Incomplete {}.", T::NAME),
        }
    }
}

impl<T: FromPayload + fmt::Debug> fmt::Debug for Payload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Complete { value, .. } => fmt::Debug::fmt(value, f),
            Payload::Incomplete(raw) => {
                let name = format!("Incomplete{}", T::NAME);
                f.debug_tuple(&name).field(&raw.as_map()).finish()
            }
        }
    }
}
