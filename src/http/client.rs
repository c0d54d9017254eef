//! Low-level HTTP client: `LoopringHttp`.
//!
//! Issues one GET per call and hands back the decoded JSON object untouched.
//! Envelope checks and typing happen one layer up, in the client.

use crate::error::HttpError;

use async_lock::RwLock;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the account's API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the Loopring REST API.
///
/// The connection session is opened on construction and shared by clones.
/// [`close`](Self::close) ends it for every clone; closing again is a no-op.
pub struct LoopringHttp {
    base_url: String,
    session: Arc<RwLock<Option<Client>>>,
}

impl LoopringHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session: Arc::new(RwLock::new(Some(client))),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Closes the session. Subsequent requests fail with
    /// [`HttpError::SessionClosed`].
    pub async fn close(&self) {
        if self.session.write().await.take().is_some() {
            tracing::debug!(base_url = %self.base_url, "Closed HTTP session");
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.session.read().await.is_none()
    }

    /// GET `path` with the given query pairs, optionally authenticated.
    ///
    /// Returns the body as a JSON object for any status when the body is one
    /// and carries a `resultInfo` envelope, so that the caller decides how
    /// relayer errors surface.
    pub async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
        api_key: Option<&str>,
    ) -> Result<Map<String, Value>, HttpError> {
        let url = self.url(path, query);
        let client = self
            .session
            .read()
            .await
            .clone()
            .ok_or(HttpError::SessionClosed)?;

        let mut req = client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            let value =
                HeaderValue::from_str(key).map_err(|_| HttpError::InvalidHeader(API_KEY_HEADER))?;
            req = req.header(API_KEY_HEADER, value);
        }

        tracing::debug!(url = %url, authenticated = api_key.is_some(), "GET");

        let resp = req.send().await?;
        let status = resp.status();
        let body_text = resp.text().await?;

        Self::decode(status, body_text)
    }

    fn url(&self, path: &str, query: &[(&'static str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let params: Vec<String> = query
                .iter()
                .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
                .collect();
            url = format!("{}?{}", url, params.join("&"));
        }
        url
    }

    fn decode(status: StatusCode, body_text: String) -> Result<Map<String, Value>, HttpError> {
        let object = match serde_json::from_str::<Value>(&body_text) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        };

        match object {
            Some(map) if status.is_success() || map.contains_key("resultInfo") => Ok(map),
            None if status.is_success() => Err(HttpError::InvalidBody(body_text)),
            _ => Err(Self::status_error(status, body_text)),
        }
    }

    fn status_error(status: StatusCode, body_text: String) -> HttpError {
        match status.as_u16() {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body_text),
            429 => HttpError::RateLimited,
            400..=499 => HttpError::BadRequest(body_text),
            code => HttpError::ServerError {
                status: code,
                body: body_text,
            },
        }
    }
}

impl Clone for LoopringHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            session: self.session.clone(),
        }
    }
}
