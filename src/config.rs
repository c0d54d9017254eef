//! Client configuration: account id, API key, endpoint.
//!
//! Values can come from a JSON account file (the format exported by the
//! Loopring wallet, camelCase or snake_case keys), from `LOOPRING_*`
//! environment variables, or be set directly on the client builder.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ENV_ACCOUNT_ID: &str = "LOOPRING_ACCOUNT_ID";
pub const ENV_API_KEY: &str = "LOOPRING_API_KEY";
pub const ENV_ENDPOINT: &str = "LOOPRING_ENDPOINT";

/// Partially filled configuration. Every field is optional until
/// [`Config::validate`].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, alias = "accountId")]
    pub account_id: Option<u64>,
    #[serde(default, alias = "apiKey")]
    pub api_key: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// A configuration with every required value present.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidConfig {
    pub account_id: u64,
    pub api_key: String,
    pub endpoint: String,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an account file.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads `LOOPRING_ACCOUNT_ID`, `LOOPRING_API_KEY` and `LOOPRING_ENDPOINT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Overwrites fields with any `LOOPRING_*` variables that are set.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(ENV_ACCOUNT_ID).filter(|v| !v.trim().is_empty()) {
            let id = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: ENV_ACCOUNT_ID,
                    value: value.clone(),
                })?;
            self.account_id = Some(id);
        }
        if let Some(value) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.api_key = Some(value);
        }
        if let Some(value) = lookup(ENV_ENDPOINT).filter(|v| !v.is_empty()) {
            self.endpoint = Some(value);
        }
        Ok(())
    }

    /// Fills fields from `other` where it has a value. Later values win.
    pub fn merge(&mut self, other: Config) {
        if other.account_id.is_some() {
            self.account_id = other.account_id;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.endpoint.is_some() {
            self.endpoint = other.endpoint;
        }
    }

    /// Checks account id, API key, then endpoint. Empty strings count as missing.
    pub fn validate(&self) -> Result<ValidConfig, ConfigError> {
        let account_id = self.account_id.ok_or(ConfigError::MissingAccountId)?;
        let api_key = self
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let endpoint = self
            .endpoint
            .clone()
            .filter(|e| !e.is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;

        Ok(ValidConfig {
            account_id,
            api_key,
            endpoint,
        })
    }
}

pub(crate) fn redact(key: &str) -> String {
    match key.chars().count() {
        0 => String::new(),
        1..=8 => "***".to_string(),
        _ => format!("{}***", key.chars().take(4).collect::<String>()),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account_id", &self.account_id)
            .field("api_key", &self.api_key.as_deref().map(redact))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl fmt::Debug for ValidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidConfig")
            .field("account_id", &self.account_id)
            .field("api_key", &redact(&self.api_key))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
