//! # VerifyForms Core
//!
//! Core flow logic and domain layer for the VerifyForms client.
//! This crate contains the verification flow controller, domain validation,
//! collaborator trait seams, and error types. It performs no I/O itself:
//! HTTP, storage, and notification delivery live behind traits implemented
//! by the infrastructure crate.

pub mod domain;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod view;

// Re-export commonly used types for convenience
pub use domain::{ContactSubmission, VerificationChannel};
pub use errors::{ApiError, FlowError, FlowResult, StoreError};
pub use services::{
    ContactConfig, ContactFormService, CooldownTimer, FlowConfig, FlowController, Notifier,
    PhoneStore, SendReceipt, VerificationApi, PHONE_NUMBER_KEY,
};
pub use view::{Control, Field, FlowView, NullView, ResendLabel, Section};
