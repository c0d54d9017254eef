//! Network URL constants for the Loopring relayer.

/// Mainnet REST API base URL.
pub const MAINNET_API_URL: &str = "https://api3.loopring.io";

/// Testnet (Goerli) REST API base URL.
pub const TESTNET_API_URL: &str = "https://uat2.loopring.io";

/// Which relayer deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn api_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_API_URL,
            Network::Testnet => TESTNET_API_URL,
        }
    }
}

/// REST paths, relative to the API base URL.
pub mod paths {
    pub const ORDERS: &str = "/api/v3/orders";
    pub const ORDER: &str = "/api/v3/order";
    pub const STORAGE_ID: &str = "/api/v3/storageId";
    pub const TIMESTAMP: &str = "/api/v3/timestamp";
    pub const DEPTH: &str = "/api/v3/depth";
}
