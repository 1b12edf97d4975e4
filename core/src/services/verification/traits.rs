//! Traits for verification service and storage integration.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::{ApiError, StoreError};

/// Storage key under which the verified phone number is persisted.
pub const PHONE_NUMBER_KEY: &str = "phoneNumber";

/// Receipt returned by a successful OTP send.
#[derive(Debug, Clone)]
pub struct SendReceipt {
    /// Provider-side identifier for the message, when one is returned.
    pub message_id: Option<String>,
    /// When the user may request another code.
    pub next_resend_at: DateTime<Utc>,
}

/// Trait for the verification service collaborator.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Request an OTP to be sent to a phone number.
    async fn request_otp(&self, phone: &str) -> Result<SendReceipt, ApiError>;

    /// Submit a code for verification against a phone number.
    async fn verify_otp(&self, phone: &str, code: &str) -> Result<(), ApiError>;
}

/// Trait for durable client-side key-value storage.
pub trait PhoneStore: Send + Sync {
    /// Store a value under a key, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read a value back, `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}
