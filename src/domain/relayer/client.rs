//! Relayer sub-client: public, unauthenticated endpoints.

use crate::client::LoopringClient;
use crate::domain::payload::Payload;
use crate::domain::relayer::RelayerTime;
use crate::error::SdkError;
use crate::network::paths;

/// Sub-client for the relayer's public endpoints.
pub struct Relayer<'a> {
    pub(crate) client: &'a LoopringClient,
}

impl<'a> Relayer<'a> {
    /// The relayer's clock.
    pub async fn timestamp(&self) -> Result<Payload<RelayerTime>, SdkError> {
        self.client
            .fetch::<RelayerTime>(paths::TIMESTAMP, Vec::new(), false)
            .await
    }
}
