//! Mock notifier for contact flow tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::services::contact::traits::Notifier;

/// One recorded delivery attempt.
#[derive(Debug, Clone)]
pub struct SentNotification {
    pub template_id: String,
    pub service_id: String,
    pub params: HashMap<String, String>,
}

/// Mock notifier recording every delivery.
pub struct MockNotifier {
    pub sent: Mutex<Vec<SentNotification>>,
    pub should_fail: bool,
}

impl MockNotifier {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<SentNotification> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(
        &self,
        template_id: &str,
        service_id: &str,
        params: &HashMap<String, String>,
    ) -> Result<(), ApiError> {
        self.sent.lock().unwrap().push(SentNotification {
            template_id: template_id.to_string(),
            service_id: service_id.to_string(),
            params: params.clone(),
        });
        if self.should_fail {
            return Err(ApiError::Transport {
                message: "notifier unreachable".to_string(),
            });
        }
        Ok(())
    }
}
