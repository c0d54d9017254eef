//! Unified SDK error types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::payload::RawPayload;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Response error: {0}")]
    Object(#[from] ObjectError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Session is closed")]
    SessionClosed,

    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("Response body is not a JSON object: {0}")]
    InvalidBody(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Missing or invalid client configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing account ID from config")]
    MissingAccountId,

    #[error("Missing API key from config")]
    MissingApiKey,

    #[error("Missing endpoint from config")]
    MissingEndpoint,

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Failures of the response object model.
#[derive(Error, Debug)]
pub enum ObjectError {
    #[error("incomplete {type_name} response: {raw}")]
    Incomplete {
        type_name: &'static str,
        raw: RawPayload,
    },

    #[error("malformed {type_name} payload: {source}")]
    Malformed {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{type_name} response is not a JSON object: {body}")]
    NotAnObject { type_name: &'static str, body: Value },

    #[error("fields {first:?} and {second:?} both normalize to {normalized:?}")]
    FieldCollision {
        first: String,
        second: String,
        normalized: String,
    },
}

// ─── Server-reported errors ──────────────────────────────────────────────────

/// Error code taxonomy reported by the relayer in `resultInfo.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnknownError,
    InvalidArguments,
    UserNotFound,
    EmptyApiKey,
    InvalidApiKey,
    InvalidAccountId,
    NoSignature,
    InvalidSignature,
    /// Any code outside the known table.
    Unclassified(i64),
}

impl ErrorCode {
    pub fn from_code(code: i64) -> Self {
        match code {
            100000 => Self::UnknownError,
            100001 => Self::InvalidArguments,
            101002 => Self::UserNotFound,
            104001 => Self::EmptyApiKey,
            104002 => Self::InvalidApiKey,
            104003 => Self::InvalidAccountId,
            104004 => Self::NoSignature,
            104005 => Self::InvalidSignature,
            other => Self::Unclassified(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::UnknownError => 100000,
            Self::InvalidArguments => 100001,
            Self::UserNotFound => 101002,
            Self::EmptyApiKey => 104001,
            Self::InvalidApiKey => 104002,
            Self::InvalidAccountId => 104003,
            Self::NoSignature => 104004,
            Self::InvalidSignature => 104005,
            Self::Unclassified(code) => *code,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::UnknownError => "unknown error",
            Self::InvalidArguments => "invalid arguments",
            Self::UserNotFound => "user not found",
            Self::EmptyApiKey => "API key is empty",
            Self::InvalidApiKey => "API key is invalid",
            Self::InvalidAccountId => "account ID is invalid",
            Self::NoSignature => "no signature supplied",
            Self::InvalidSignature => "signature is invalid",
            Self::Unclassified(_) => "unclassified error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}

/// The `resultInfo` envelope attached to failed responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
}

impl ResultInfo {
    /// Reads the envelope from a raw response object, if present and well-formed.
    pub fn from_map(map: &Map<String, Value>) -> Option<Self> {
        map.get("resultInfo")
            .and_then(|info| serde_json::from_value(info.clone()).ok())
    }

    pub fn is_error(&self) -> bool {
        self.code != 0
    }
}

/// A relayer-reported error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl From<ResultInfo> for ApiError {
    fn from(info: ResultInfo) -> Self {
        let code = ErrorCode::from_code(info.code);
        Self {
            message: info
                .message
                .unwrap_or_else(|| code.description().to_string()),
            code,
        }
    }
}

/// Fails with the relayer's error if `map` carries a non-zero `resultInfo` code.
pub fn raise_for_result_info(map: &Map<String, Value>) -> Result<(), ApiError> {
    match ResultInfo::from_map(map) {
        Some(info) if info.is_error() => Err(info.into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_error_code_table() {
        assert_eq!(ErrorCode::from_code(104002), ErrorCode::InvalidApiKey);
        assert_eq!(ErrorCode::from_code(104003), ErrorCode::InvalidAccountId);
        assert_eq!(ErrorCode::from_code(101002), ErrorCode::UserNotFound);
        assert_eq!(ErrorCode::from_code(1), ErrorCode::Unclassified(1));
        for code in [100000, 100001, 101002, 104001, 104002, 104003, 104004, 104005] {
            assert_eq!(ErrorCode::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_raise_for_result_info() {
        let raw = object(json!({"resultInfo": {"code": 104002, "message": "invalid apikey"}}));
        let err = raise_for_result_info(&raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidApiKey);
        assert_eq!(err.message, "invalid apikey");
        assert_eq!(err.to_string(), "API key is invalid (104002): invalid apikey");
    }

    #[test]
    fn test_success_code_and_missing_envelope_pass() {
        let ok = object(json!({"resultInfo": {"code": 0}, "timestamp": 1}));
        assert!(raise_for_result_info(&ok).is_ok());
        let plain = object(json!({"hash": "0x1", "status": "processed"}));
        assert!(raise_for_result_info(&plain).is_ok());
    }

    #[test]
    fn test_message_falls_back_to_description() {
        let raw = object(json!({"resultInfo": {"code": 101002}}));
        let err = raise_for_result_info(&raw).unwrap_err();
        assert_eq!(err.message, "user not found");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            SdkError::from(ConfigError::MissingApiKey).to_string(),
            "Config error: Missing API key from config"
        );
    }
}
