//! Domain types and validation rules for the verification and contact flows.

pub mod channel;
pub mod contact;
pub mod otp;
pub mod phone;

pub use channel::VerificationChannel;
pub use contact::{is_valid_contact_phone, is_valid_email, ContactSubmission};
pub use otp::{is_complete_code, sanitize_otp_input, OTP_LENGTH};
pub use phone::{is_valid_phone, mask_phone, normalize_phone_input, PHONE_LENGTH};
