//! Mock implementations for testing the verification flow.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::errors::{ApiError, StoreError};
use crate::services::verification::traits::{PhoneStore, SendReceipt, VerificationApi};

/// Scripted outcome for a mocked API call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Ok,
    ServiceError(String),
    TransportError(String),
}

/// Mock verification service recording every call.
pub struct MockVerificationApi {
    pub send_response: Mutex<MockResponse>,
    pub verify_response: Mutex<MockResponse>,
    pub send_calls: Mutex<Vec<String>>,
    pub verify_calls: Mutex<Vec<(String, String)>>,
}

impl MockVerificationApi {
    pub fn new() -> Self {
        Self {
            send_response: Mutex::new(MockResponse::Ok),
            verify_response: Mutex::new(MockResponse::Ok),
            send_calls: Mutex::new(Vec::new()),
            verify_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_send_response(self, response: MockResponse) -> Self {
        *self.send_response.lock().unwrap() = response;
        self
    }

    pub fn with_verify_response(self, response: MockResponse) -> Self {
        *self.verify_response.lock().unwrap() = response;
        self
    }

    pub fn send_call_count(&self) -> usize {
        self.send_calls.lock().unwrap().len()
    }

    pub fn verify_call_count(&self) -> usize {
        self.verify_calls.lock().unwrap().len()
    }

    pub fn last_verify_call(&self) -> Option<(String, String)> {
        self.verify_calls.lock().unwrap().last().cloned()
    }

    fn outcome(response: &MockResponse) -> Result<(), ApiError> {
        match response {
            MockResponse::Ok => Ok(()),
            MockResponse::ServiceError(message) => Err(ApiError::Service {
                message: message.clone(),
            }),
            MockResponse::TransportError(message) => Err(ApiError::Transport {
                message: message.clone(),
            }),
        }
    }
}

#[async_trait]
impl VerificationApi for MockVerificationApi {
    async fn request_otp(&self, phone: &str) -> Result<SendReceipt, ApiError> {
        self.send_calls.lock().unwrap().push(phone.to_string());
        Self::outcome(&self.send_response.lock().unwrap())?;
        Ok(SendReceipt {
            message_id: Some(format!("mock-msg-{}", self.send_call_count())),
            next_resend_at: Utc::now() + Duration::seconds(60),
        })
    }

    async fn verify_otp(&self, phone: &str, code: &str) -> Result<(), ApiError> {
        self.verify_calls
            .lock()
            .unwrap()
            .push((phone.to_string(), code.to_string()));
        Self::outcome(&self.verify_response.lock().unwrap())
    }
}

/// Mock phone store backed by a hash map.
pub struct MockPhoneStore {
    pub values: Mutex<HashMap<String, String>>,
    pub should_fail: bool,
}

impl MockPhoneStore {
    pub fn new(should_fail: bool) -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            should_fail,
        }
    }
}

impl PhoneStore for MockPhoneStore {
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.should_fail {
            return Err(StoreError::Write {
                message: "store unavailable".to_string(),
            });
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.should_fail {
            return Err(StoreError::Read {
                message: "store unavailable".to_string(),
            });
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }
}
