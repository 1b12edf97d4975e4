//! reqwest-backed implementation of the verification service client.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use vf_core::errors::ApiError;
use vf_core::services::verification::{SendReceipt, VerificationApi};

use crate::InfrastructureError;

use super::config::VerificationClientConfig;
use super::endpoint;

#[derive(Debug, Serialize)]
struct SendOtpRequest<'a> {
    #[serde(rename = "phoneNumber")]
    phone_number: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpRequest<'a> {
    #[serde(rename = "phoneNumber")]
    phone_number: &'a str,
    otp: &'a str,
}

#[derive(Debug, Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the verification service.
///
/// Talks JSON to `POST /api/send-otp` and `POST /api/verify-otp` on a
/// fixed base URL. Non-2xx responses become [`ApiError::Service`] with
/// the message from the `{"error": ...}` body; everything below the
/// protocol (unreachable host, timeout, undecodable body) becomes
/// [`ApiError::Transport`].
pub struct HttpVerificationClient {
    client: Client,
    config: VerificationClientConfig,
}

impl HttpVerificationClient {
    pub fn new(config: VerificationClientConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    async fn service_error(response: Response) -> ApiError {
        let status = response.status();
        let body: ErrorBody = response.json().await.unwrap_or_default();
        tracing::warn!(
            status = %status,
            event = "verification_api_error",
            "Verification service returned an error status"
        );
        // An absent error body becomes an empty message, so the flow's
        // per-operation fallback text applies.
        ApiError::Service {
            message: body.error.unwrap_or_default(),
        }
    }

    fn transport_error(err: reqwest::Error) -> ApiError {
        tracing::warn!(
            error = %err,
            event = "verification_api_transport_error",
            "Verification service request failed"
        );
        ApiError::Transport {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl VerificationApi for HttpVerificationClient {
    async fn request_otp(&self, phone: &str) -> Result<SendReceipt, ApiError> {
        let url = endpoint(&self.config.base_url, "/api/send-otp");
        let response = self
            .client
            .post(&url)
            .json(&SendOtpRequest {
                phone_number: phone,
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        // The success body is unspecified and ignored beyond the status.
        Ok(SendReceipt {
            message_id: None,
            next_resend_at: Utc::now() + Duration::seconds(self.config.resend_cooldown_seconds),
        })
    }

    async fn verify_otp(&self, phone: &str, code: &str) -> Result<(), ApiError> {
        let url = endpoint(&self.config.base_url, "/api/verify-otp");
        let response = self
            .client
            .post(&url)
            .json(&VerifyOtpRequest {
                phone_number: phone,
                otp: code,
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_send_request_body_shape() {
        let body = serde_json::to_value(SendOtpRequest {
            phone_number: "9123456789",
        })
        .unwrap();
        assert_eq!(body, json!({ "phoneNumber": "9123456789" }));
    }

    #[test]
    fn test_verify_request_body_shape() {
        let body = serde_json::to_value(VerifyOtpRequest {
            phone_number: "9123456789",
            otp: "123456",
        })
        .unwrap();
        assert_eq!(body, json!({ "phoneNumber": "9123456789", "otp": "123456" }));
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ErrorBody = serde_json::from_str(r#"{ "error": "Invalid code" }"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Invalid code"));

        // A body without the field still parses.
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
    }

    #[tokio::test]
    async fn test_service_error_carries_body_message() {
        let response = http::Response::builder()
            .status(StatusCode::BAD_REQUEST)
            .body(r#"{ "error": "Invalid code" }"#)
            .unwrap();
        let err = HttpVerificationClient::service_error(Response::from(response)).await;
        assert_eq!(
            err,
            ApiError::Service {
                message: "Invalid code".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_service_error_without_body_is_empty_for_fallback() {
        // No error body: the message stays empty so the flow's generic
        // text ("Failed to send OTP" / "Verification failed") applies.
        let response = http::Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body("")
            .unwrap();
        let err = HttpVerificationClient::service_error(Response::from(response)).await;
        assert_eq!(
            err,
            ApiError::Service {
                message: String::new()
            }
        );
        assert_eq!(err.display_message("Failed to send OTP"), "Failed to send OTP");
    }

    #[test]
    fn test_client_builds_with_defaults() {
        let client = HttpVerificationClient::new(VerificationClientConfig::default());
        assert!(client.is_ok());
    }
}
