//! Integration tests for mailbox-quote
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod api_tests;
pub mod config_validation_tests;
pub mod pricing_tests;
