//! Configuration for the verification service client.

use std::env;

/// Configuration for [`super::HttpVerificationClient`].
#[derive(Debug, Clone)]
pub struct VerificationClientConfig {
    /// Base URL the service is reachable at.
    pub base_url: String,
    /// Bounded request timeout in seconds. The source this flow replaces
    /// relied on platform defaults; a bounded timeout keeps the loading
    /// state from hanging on a dead host.
    pub timeout_seconds: u64,
    /// Seconds until a resend may be requested, reported in the
    /// send receipt.
    pub resend_cooldown_seconds: i64,
}

impl Default for VerificationClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 10,
            resend_cooldown_seconds: 60,
        }
    }
}

impl VerificationClientConfig {
    /// Build from environment variables, falling back to defaults.
    ///
    /// Reads `VERIFY_API_BASE_URL` and `VERIFY_API_TIMEOUT_SECONDS`
    /// after loading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            base_url: env::var("VERIFY_API_BASE_URL").unwrap_or(defaults.base_url),
            timeout_seconds: env::var("VERIFY_API_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
            resend_cooldown_seconds: defaults.resend_cooldown_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VerificationClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.resend_cooldown_seconds, 60);
    }
}
