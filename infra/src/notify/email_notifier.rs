//! reqwest-backed notifier for a transactional-email HTTP API.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use vf_core::errors::ApiError;
use vf_core::services::contact::Notifier;

use crate::http::endpoint;
use crate::InfrastructureError;

/// Configuration for [`HttpNotifier`].
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Base URL of the email API.
    pub base_url: String,
    /// Account identifier sent with each request.
    pub user_id: String,
    /// Bounded request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.emailjs.com".to_string(),
            user_id: String::new(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a HashMap<String, String>,
}

/// Notifier delivering templated messages over a transactional-email
/// HTTP API.
pub struct HttpNotifier {
    client: Client,
    config: NotifierConfig,
}

impl HttpNotifier {
    pub fn new(config: NotifierConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send(
        &self,
        template_id: &str,
        service_id: &str,
        params: &HashMap<String, String>,
    ) -> Result<(), ApiError> {
        let url = endpoint(&self.config.base_url, "/api/v1.0/email/send");
        let response = self
            .client
            .post(&url)
            .json(&SendEmailRequest {
                service_id,
                template_id,
                user_id: &self.config.user_id,
                template_params: params,
            })
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(
                    error = %err,
                    event = "notification_transport_error",
                    "Notification request failed"
                );
                ApiError::Transport {
                    message: err.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = %status,
                event = "notification_rejected",
                "Notification service rejected the request"
            );
            return Err(ApiError::Service {
                message: if body.is_empty() {
                    format!("Notification service returned {}", status)
                } else {
                    body
                },
            });
        }

        tracing::info!(
            template_id = template_id,
            service_id = service_id,
            event = "notification_sent",
            "Notification delivered"
        );
        Ok(())
    }
}
