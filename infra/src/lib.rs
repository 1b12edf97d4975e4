//! # VerifyForms Infrastructure
//!
//! Collaborator implementations behind the core trait seams: the
//! verification service HTTP client, the notification sender, and
//! durable client-side storage.

pub mod http;
pub mod notify;
pub mod storage;

use thiserror::Error;

/// Errors raised while constructing infrastructure components.
///
/// Runtime call failures are mapped into `vf_core` error types at the
/// trait boundary; this covers what happens before a component exists.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub use http::{HttpVerificationClient, VerificationClientConfig};
pub use notify::{HttpNotifier, NotifierConfig};
pub use storage::{FileStore, MemoryStore};
