//! High-level client: `LoopringClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the error-handling mode, and the shared
//! fetch path every sub-client goes through.

use crate::config::{redact, Config};
use crate::domain::order::client::Orders;
use crate::domain::orderbook::client::Orderbooks;
use crate::domain::payload::{FromPayload, Payload};
use crate::domain::relayer::client::Relayer;
use crate::error::{raise_for_result_info, ObjectError, SdkError};
use crate::http::{LoopringHttp, DEFAULT_TIMEOUT};
use crate::network::Network;

use std::fmt;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::orderbook::client::Orderbooks as OrderbooksClient;
pub use crate::domain::relayer::client::Relayer as RelayerClient;

/// The primary entry point for the Loopring SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.orders()`, `client.orderbooks()`, `client.relayer()`.
///
/// In raising mode (the default) relayer error envelopes surface as
/// [`SdkError::Api`] and placeholder responses as [`SdkError::Object`], so a
/// returned [`Payload`] is always complete. With `handle_errors(false)` the
/// payload is returned as-is and [`Payload::Incomplete`] is the only signal.
pub struct LoopringClient {
    pub(crate) http: LoopringHttp,
    account_id: u64,
    api_key: String,
    handle_errors: bool,
}

impl LoopringClient {
    pub fn builder() -> LoopringClientBuilder {
        LoopringClientBuilder::default()
    }

    pub fn account_id(&self) -> u64 {
        self.account_id
    }

    pub fn endpoint(&self) -> &str {
        self.http.base_url()
    }

    pub fn handle_errors(&self) -> bool {
        self.handle_errors
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn orderbooks(&self) -> Orderbooks<'_> {
        Orderbooks { client: self }
    }

    pub fn relayer(&self) -> Relayer<'_> {
        Relayer { client: self }
    }

    // ── Session ──────────────────────────────────────────────────────────

    /// Closes the connection session shared by this client and its clones.
    /// Calling it again is a no-op.
    pub async fn close(&self) {
        self.http.close().await;
    }

    pub async fn is_closed(&self) -> bool {
        self.http.is_closed().await
    }

    /// GET `path` and turn the body into a typed payload, applying the
    /// error-handling mode.
    pub(crate) async fn fetch<T: FromPayload>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
        authenticated: bool,
    ) -> Result<Payload<T>, SdkError> {
        let api_key = authenticated.then_some(self.api_key.as_str());
        let body = self.http.get(path, &query, api_key).await?;

        if self.handle_errors {
            raise_for_result_info(&body)?;
        }

        match Payload::<T>::parse(body)? {
            Payload::Incomplete(raw) if self.handle_errors => Err(ObjectError::Incomplete {
                type_name: T::NAME,
                raw,
            }
            .into()),
            payload => Ok(payload),
        }
    }
}

impl Clone for LoopringClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            account_id: self.account_id,
            api_key: self.api_key.clone(),
            handle_errors: self.handle_errors,
        }
    }
}

impl fmt::Debug for LoopringClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopringClient")
            .field("endpoint", &self.endpoint())
            .field("account_id", &self.account_id)
            .field("api_key", &redact(&self.api_key))
            .field("handle_errors", &self.handle_errors)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Collects settings for a [`LoopringClient`].
///
/// Explicit setters and [`config`](Self::config) all write into one
/// [`Config`]; whichever sets a value last wins. There is no default
/// endpoint: pick one with [`endpoint`](Self::endpoint) or
/// [`network`](Self::network).
pub struct LoopringClientBuilder {
    config: Config,
    handle_errors: bool,
    timeout: Duration,
}

impl Default for LoopringClientBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            handle_errors: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LoopringClientBuilder {
    pub fn account_id(mut self, account_id: u64) -> Self {
        self.config.account_id = Some(account_id);
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    pub fn network(self, network: Network) -> Self {
        self.endpoint(network.api_url())
    }

    /// Merges values from a [`Config`] (e.g. an account file or the environment).
    pub fn config(mut self, config: Config) -> Self {
        self.config.merge(config);
        self
    }

    /// Whether relayer errors and placeholders become `Err` (default `true`).
    pub fn handle_errors(mut self, handle_errors: bool) -> Self {
        self.handle_errors = handle_errors;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration and opens the connection session.
    pub fn build(self) -> Result<LoopringClient, SdkError> {
        let config = self.config.validate()?;
        let http = LoopringHttp::new(&config.endpoint, self.timeout)?;

        tracing::debug!(
            endpoint = %http.base_url(),
            account_id = config.account_id,
            handle_errors = self.handle_errors,
            "Built Loopring client"
        );

        Ok(LoopringClient {
            http,
            account_id: config.account_id,
            api_key: config.api_key,
            handle_errors: self.handle_errors,
        })
    }
}
