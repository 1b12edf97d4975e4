//! Trait for the notification-sender collaborator.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::ApiError;

/// Trait for delivering a flat key-value payload through a templated
/// notification channel (transactional email or similar).
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `params` through the template on the given service.
    async fn send(
        &self,
        template_id: &str,
        service_id: &str,
        params: &HashMap<String, String>,
    ) -> Result<(), ApiError>;
}
