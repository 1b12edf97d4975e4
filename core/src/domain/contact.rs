//! Contact form submission entity and its validation rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Lenient international pattern: optional +, optional parens around the
// first group, dot/dash/space separators.
static CONTACT_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\+]?[(]?[0-9]{3}[)]?[-\s\.]?[0-9]{3}[-\s\.]?[0-9]{4,6}$").unwrap()
});

/// A contact details submission as entered by the user.
///
/// The email is carried from the verification step and is not re-entered;
/// the remaining fields are validated client-side before delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Full name, required non-empty after trimming.
    pub name: String,
    /// Phone number in a lenient international format.
    pub phone: String,
    /// Postal address, required non-empty after trimming.
    pub address: String,
    /// Email carried over from the verification flow.
    pub email: String,
}

/// Check email shape: something@something.something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check a contact phone number against the lenient international pattern.
pub fn is_valid_contact_phone(phone: &str) -> bool {
    CONTACT_PHONE_REGEX.is_match(phone)
}
