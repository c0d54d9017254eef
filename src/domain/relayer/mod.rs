//! Relayer domain: server clock.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::payload::FromPayload;
use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "http")]
pub use client::Relayer;

/// The relayer's current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayerTime {
    #[serde(with = "serde_util::timestamp_ms")]
    pub timestamp: DateTime<Utc>,
}

impl RelayerTime {
    /// Epoch milliseconds, as used for order `start`/`end` filters.
    pub fn millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}

impl FromPayload for RelayerTime {
    const NAME: &'static str = "RelayerTime";
    const MIN_KEYS: usize = 1;
}

impl fmt::Display for RelayerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.timestamp, f)
    }
}
