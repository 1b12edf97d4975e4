//! Configuration for the verification flow.

/// Configuration for the verification flow controller.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Minimum seconds between OTP send requests.
    pub resend_cooldown_seconds: u32,
    /// Delay in milliseconds before focusing the OTP field after the
    /// section is revealed, so the reveal animation can settle.
    pub focus_settle_ms: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: 60,
            focus_settle_ms: 500,
        }
    }
}
