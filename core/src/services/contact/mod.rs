//! Contact details submission flow.
//!
//! Validates the three required fields client-side and delegates delivery
//! to the notification-sender collaborator. Far simpler than the
//! verification flow: one validate-then-call sequence with a persistent
//! success state.

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::ContactConfig;
pub use service::ContactFormService;
pub use traits::Notifier;
