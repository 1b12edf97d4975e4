//! Verification channel selection.

use serde::{Deserialize, Serialize};

/// The channel a user verifies through.
///
/// Exactly one channel is active at a time; the controller hides the
/// OTP entry section whenever the channel changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationChannel {
    /// Verify with an email address (no OTP round-trip).
    Email,
    /// Verify with a mobile number via SMS OTP.
    Phone,
}

impl Default for VerificationChannel {
    fn default() -> Self {
        VerificationChannel::Email
    }
}

impl VerificationChannel {
    /// Stable lowercase name, used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationChannel::Email => "email",
            VerificationChannel::Phone => "phone",
        }
    }
}
