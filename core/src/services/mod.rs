//! Flow services for the VerifyForms client.

pub mod contact;
pub mod verification;

pub use contact::{ContactConfig, ContactFormService, Notifier};
pub use verification::{
    CooldownTick, CooldownTimer, FlowConfig, FlowController, PhoneStore, SendReceipt,
    VerificationApi, PHONE_NUMBER_KEY,
};
