//! Orders sub-client: list, detail, storage ids, submit.

use crate::client::LoopringClient;
use crate::domain::order::{Order, OrderList, StorageId, SubmitOrderRequest};
use crate::domain::payload::Payload;
use crate::error::SdkError;
use crate::network::paths;
use crate::shared::{OrderStatus, OrderType, Side, TradeChannel};

/// Default page size of the order listing.
pub const DEFAULT_LIMIT: u32 = 50;

// ─── Query ───────────────────────────────────────────────────────────────────

/// Filters for [`Orders::list`]. Unset and zero values are not sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersQuery {
    /// Lower bound on creation time, epoch ms.
    pub start: Option<u64>,
    /// Upper bound on creation time, epoch ms.
    pub end: Option<u64>,
    pub limit: u32,
    pub offset: u32,
    pub market: Option<String>,
    pub order_types: Vec<OrderType>,
    pub side: Option<Side>,
    pub statuses: Vec<OrderStatus>,
    pub trade_channels: Vec<TradeChannel>,
}

impl Default for OrdersQuery {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
            market: None,
            order_types: Vec::new(),
            side: None,
            statuses: Vec::new(),
            trade_channels: Vec::new(),
        }
    }
}

impl OrdersQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start_ms: u64) -> Self {
        self.start = Some(start_ms);
        self
    }

    pub fn with_end(mut self, end_ms: u64) -> Self {
        self.end = Some(end_ms);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_types.push(order_type);
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = OrderStatus>) -> Self {
        self.statuses.extend(statuses);
        self
    }

    pub fn with_trade_channel(mut self, channel: TradeChannel) -> Self {
        self.trade_channels.push(channel);
        self
    }

    /// Query pairs in wire order, `accountId` first.
    pub(crate) fn to_query(&self, account_id: u64) -> Vec<(&'static str, String)> {
        let mut query = vec![("accountId", account_id.to_string())];

        if let Some(start) = self.start.filter(|v| *v > 0) {
            query.push(("start", start.to_string()));
        }
        if let Some(end) = self.end.filter(|v| *v > 0) {
            query.push(("end", end.to_string()));
        }
        if self.limit > 0 {
            query.push(("limit", self.limit.to_string()));
        }
        if self.offset > 0 {
            query.push(("offset", self.offset.to_string()));
        }
        if let Some(market) = self.market.as_deref().filter(|m| !m.is_empty()) {
            query.push(("market", market.to_string()));
        }
        if !self.order_types.is_empty() {
            query.push(("orderTypes", join(&self.order_types)));
        }
        if let Some(side) = self.side {
            query.push(("side", side.to_string()));
        }
        if !self.statuses.is_empty() {
            query.push(("status", join(&self.statuses)));
        }
        if !self.trade_channels.is_empty() {
            query.push(("tradeChannels", join(&self.trade_channels)));
        }

        query
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

// ─── Sub-client ──────────────────────────────────────────────────────────────

/// Account-scoped order endpoints. Every call sends the API key and account id.
pub struct Orders<'a> {
    pub(crate) client: &'a LoopringClient,
}

impl<'a> Orders<'a> {
    /// One page of the account's orders.
    pub async fn list(&self, query: &OrdersQuery) -> Result<Payload<OrderList>, SdkError> {
        let payload = self
            .client
            .fetch::<OrderList>(paths::ORDERS, query.to_query(self.client.account_id()), true)
            .await?;
        if let Some(list) = payload.as_complete() {
            list.iter().for_each(trace_extra);
        }
        Ok(payload)
    }

    /// A single order by hash.
    ///
    /// An empty hash fails with [`SdkError::InvalidArgument`] without touching
    /// the network.
    pub async fn get(&self, order_hash: &str) -> Result<Payload<Order>, SdkError> {
        if order_hash.is_empty() {
            return Err(SdkError::InvalidArgument(
                "Missing 'order_hash' argument".to_string(),
            ));
        }

        let query = vec![
            ("accountId", self.client.account_id().to_string()),
            ("orderHash", order_hash.to_string()),
        ];
        let payload = self.client.fetch::<Order>(paths::ORDER, query, true).await?;
        if let Some(order) = payload.as_complete() {
            trace_extra(order);
        }
        Ok(payload)
    }

    /// Next storage id for orders selling `sell_token_id`.
    pub async fn next_storage_id(
        &self,
        sell_token_id: u32,
    ) -> Result<Payload<StorageId>, SdkError> {
        let query = vec![
            ("accountId", self.client.account_id().to_string()),
            ("sellTokenId", sell_token_id.to_string()),
        ];
        self.client
            .fetch::<StorageId>(paths::STORAGE_ID, query, true)
            .await
    }

    /// Order placement needs an EdDSA signature over the order, which this
    /// client cannot produce. Always fails with [`SdkError::Unsupported`].
    pub async fn submit(&self, request: &SubmitOrderRequest) -> Result<Payload<Order>, SdkError> {
        tracing::warn!(
            account_id = request.account_id,
            storage_id = request.storage_id,
            "Order submission is not supported"
        );
        Err(SdkError::Unsupported("submit_order"))
    }
}

fn trace_extra(order: &Order) {
    if !order.extra.is_empty() {
        tracing::trace!(
            hash = %order.hash,
            fields = ?order.extra.keys().collect::<Vec<_>>(),
            "Order carries unmodelled fields"
        );
    }
}
