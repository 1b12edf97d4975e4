//! Verification flow module for phone/email sign-up.
//!
//! This module drives the complete client-side OTP workflow:
//! - Channel selection between email and phone
//! - Phone input normalization and validation
//! - OTP send with resend cooldown
//! - OTP entry with auto-verify and the sign-in gate
//! - Integration with the verification service and phone store seams

mod config;
mod controller;
mod cooldown;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use config::FlowConfig;
pub use controller::FlowController;
pub use cooldown::{CooldownTick, CooldownTimer};
pub use traits::{PhoneStore, SendReceipt, VerificationApi, PHONE_NUMBER_KEY};
