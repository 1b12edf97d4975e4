//! Error types for the verification and contact flows.
//!
//! Every error here is recovered at the triggering handler: it is surfaced
//! through the view and the flow returns to a retryable state. Nothing is
//! fatal to the session.

use thiserror::Error;

/// Errors returned by the verification service collaborator.
///
/// A `Service` error carries the message the service put in its error
/// body; a `Transport` error covers everything below that (unreachable
/// host, timeout, undecodable body). The UI treats both the same way,
/// the split exists so callers can log them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    Service { message: String },

    #[error("transport error: {message}")]
    Transport { message: String },
}

impl ApiError {
    /// The message to surface inline, falling back to `fallback` when the
    /// service gave no usable text.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Service { message } if !message.is_empty() => message.clone(),
            ApiError::Transport { message } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Errors from the durable client-side store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage read failed: {message}")]
    Read { message: String },

    #[error("storage write failed: {message}")]
    Write { message: String },
}

/// Flow-level errors (general purpose)
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type FlowResult<T> = Result<T, FlowError>;
