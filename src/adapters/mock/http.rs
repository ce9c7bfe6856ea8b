//! Mock HTTP client for testing.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: serde_json::Value,
}

/// Configured outcome for the next requests.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

impl MockResponse {
    /// A response with the given status and text body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }
}

/// Mock HTTP client that records every request and replays one outcome.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(MockResponse::status(200, "OK"));
/// relay.send(&message).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the outcome returned for every subsequent request.
    pub fn set_response(&self, response: MockResponse) {
        if let Ok(mut slot) = self.response.lock() {
            *slot = Some(response);
        }
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
                body: body.clone(),
            });
        }

        let configured = self.response.lock().ok().and_then(|slot| slot.clone());
        match configured {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_requests() {
        let client = MockHttpClient::new();
        client.set_response(MockResponse::status(200, "OK"));

        let response = client
            .post_json(
                "https://example.com/send",
                &serde_json::json!({"a": 1}),
                &Headers::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://example.com/send");
        assert_eq!(requests[0].body["a"], 1);
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client
            .post_json("https://example.com/x", &serde_json::json!({}), &Headers::new())
            .await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }
}
