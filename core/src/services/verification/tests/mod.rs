//! Tests for the verification flow.

pub mod mocks;
