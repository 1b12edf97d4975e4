//! HTTP client for the verification service.

mod config;
mod verification_client;

pub use config::VerificationClientConfig;
pub use verification_client::HttpVerificationClient;

/// Join a base URL and a path without doubling the slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::endpoint;

    #[test]
    fn test_endpoint_joining() {
        assert_eq!(
            endpoint("http://localhost:3000", "/api/send-otp"),
            "http://localhost:3000/api/send-otp"
        );
        assert_eq!(
            endpoint("http://localhost:3000/", "api/send-otp"),
            "http://localhost:3000/api/send-otp"
        );
    }
}
