//! Tests for the contact submission flow.

pub mod mocks;

mod service_tests;
