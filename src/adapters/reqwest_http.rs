//! Reqwest-based HTTP client adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Default request timeout for relay calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client implementation using reqwest.
///
/// ```ignore
/// use folio::adapters::ReqwestHttpClient;
/// use folio::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::new();
/// let response = client.post_json(url, &serde_json::json!({}), &Headers::new()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client with the default timeout.
    ///
    /// Falls back to reqwest's defaults if the builder cannot be constructed.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Wrap a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    fn header_map(headers: &Headers) -> Result<HeaderMap, HttpError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| HttpError::Other(format!("invalid header name '{}': {}", key, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| HttpError::Other(format!("invalid value for '{}': {}", key, e)))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        // `headers()` replaces same-named entries, so a caller-supplied
        // Content-Type overrides the one `json()` sets instead of doubling it
        let builder = self
            .client
            .post(url)
            .json(body)
            .headers(Self::header_map(headers)?);

        let response = builder.send().await.map_err(Self::convert_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::new(status, body))
    }
}
