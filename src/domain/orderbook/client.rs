//! Orderbooks sub-client: market depth.

use crate::client::LoopringClient;
use crate::domain::orderbook::OrderBook;
use crate::domain::payload::Payload;
use crate::error::SdkError;
use crate::network::paths;

/// Parameters of a depth request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthQuery {
    /// Trading pair, e.g. `LRC-ETH`.
    pub market: String,
    /// Price aggregation level; 0 is the finest.
    pub level: u32,
    /// Levels per side.
    pub limit: u32,
}

impl DepthQuery {
    pub const DEFAULT_LIMIT: u32 = 50;

    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            level: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("market", self.market.clone()),
            ("level", self.level.to_string()),
        ];
        if self.limit > 0 {
            query.push(("limit", self.limit.to_string()));
        }
        query
    }
}

/// Sub-client for public order book data.
pub struct Orderbooks<'a> {
    pub(crate) client: &'a LoopringClient,
}

impl<'a> Orderbooks<'a> {
    /// Current depth of a market. Not authenticated.
    pub async fn depth(&self, query: &DepthQuery) -> Result<Payload<OrderBook>, SdkError> {
        if query.market.is_empty() {
            return Err(SdkError::InvalidArgument(
                "Missing 'market' argument".to_string(),
            ));
        }
        self.client
            .fetch::<OrderBook>(paths::DEPTH, query.to_query(), false)
            .await
    }
}
