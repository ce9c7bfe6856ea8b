//! Email relay used by the contact form.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::ContactMessage;
use crate::error::RelayError;
use crate::startup::RelaySettings;
use crate::traits::{Headers, HttpClient};

/// EmailJS REST path, relative to the configured base URL.
pub const EMAILJS_SEND_PATH: &str = "/api/v1.0/email/send";

/// Delivers a contact message somewhere a human will read it.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// EmailJS over an [`HttpClient`].
pub struct EmailJsRelay {
    client: Arc<dyn HttpClient>,
    settings: RelaySettings,
}

impl EmailJsRelay {
    pub fn new(client: Arc<dyn HttpClient>, settings: RelaySettings) -> Self {
        Self { client, settings }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.settings.base_url.trim_end_matches('/'),
            EMAILJS_SEND_PATH
        )
    }

    fn payload(&self, message: &ContactMessage) -> Result<serde_json::Value, RelayError> {
        let missing = self.settings.missing();
        if !missing.is_empty() {
            return Err(RelayError::NotConfigured {
                missing: missing.join(", "),
            });
        }
        Ok(json!({
            "service_id": self.settings.service_id,
            "template_id": self.settings.template_id,
            "user_id": self.settings.public_key,
            "template_params": message,
        }))
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let body = self.payload(message)?;
        let url = self.endpoint();

        tracing::info!(url = %url, "Sending contact message");
        let response = self.client.post_json(&url, &body, &Headers::new()).await?;

        if response.is_success() {
            tracing::info!(status = response.status, "Contact message accepted");
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: response.status,
                message: response.text(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;

    fn settings() -> RelaySettings {
        RelaySettings {
            base_url: "https://relay.test/".to_string(),
            service_id: Some("svc".to_string()),
            template_id: Some("tpl".to_string()),
            public_key: Some("pk".to_string()),
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
            time: "2024-01-01 10:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_emailjs_payload() {
        let client = MockHttpClient::new();
        client.set_response(MockResponse::status(200, "OK"));
        let relay = EmailJsRelay::new(Arc::new(client.clone()), settings());

        relay.send(&message()).await.unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://relay.test/api/v1.0/email/send");
        let body = &requests[0].body;
        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["template_id"], "tpl");
        assert_eq!(body["user_id"], "pk");
        assert_eq!(body["template_params"]["name"], "Jo");
        assert_eq!(body["template_params"]["time"], "2024-01-01 10:00:00");
        // The JSON transport sets Content-Type itself
        assert!(requests[0].headers.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_skip_the_network() {
        let client = MockHttpClient::new();
        let relay = EmailJsRelay::new(
            Arc::new(client.clone()),
            RelaySettings {
                public_key: None,
                ..settings()
            },
        );

        let err = relay.send(&message()).await.unwrap_err();
        assert!(matches!(err, RelayError::NotConfigured { ref missing } if missing.contains("PUBLIC_KEY")));
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let client = MockHttpClient::new();
        client.set_response(MockResponse::status(400, "The user ID is invalid"));
        let relay = EmailJsRelay::new(Arc::new(client), settings());

        let err = relay.send(&message()).await.unwrap_err();
        assert_eq!(
            err,
            RelayError::Rejected {
                status: 400,
                message: "The user ID is invalid".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_error_maps_through() {
        let client = MockHttpClient::new();
        client.set_response(MockResponse::Error(HttpError::Timeout("15s".to_string())));
        let relay = EmailJsRelay::new(Arc::new(client), settings());

        let err = relay.send(&message()).await.unwrap_err();
        assert_eq!(err, RelayError::Timeout("15s".to_string()));
        assert!(err.is_retryable());
    }
}
