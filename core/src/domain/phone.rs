//! Phone number normalization and validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Expected length of a mobile number, digits only.
pub const PHONE_LENGTH: usize = 10;

// Indian mobile number: 10 digits starting with 6-9.
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());

/// Normalize raw phone input by stripping every non-digit character and
/// truncating to the first [`PHONE_LENGTH`] digits.
///
/// Pure and idempotent; intended to run on every keystroke, with the
/// result written back to the input field.
pub fn normalize_phone_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_LENGTH)
        .collect()
}

/// Check whether a normalized value is a valid mobile number.
///
/// Valid iff the value is exactly 10 digits and starts with 6-9.
pub fn is_valid_phone(phone: &str) -> bool {
    MOBILE_REGEX.is_match(phone)
}

/// Mask a phone number for logging, keeping only the last 4 characters.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
