//! OTP input handling.

/// Length of a one-time passcode.
pub const OTP_LENGTH: usize = 6;

/// Sanitize raw OTP input by stripping non-digit characters and capping
/// at [`OTP_LENGTH`] digits.
pub fn sanitize_otp_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(OTP_LENGTH)
        .collect()
}

/// Check whether a sanitized value is a complete 6-digit code.
pub fn is_complete_code(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}
