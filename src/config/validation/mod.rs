//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: server, CORS, notification and logging validators
//! - `pricing_validators`: tier table, package table and fee policy
//! - `tests`: Test suite for all validators

mod config_validators;
mod pricing_validators;
mod trait_def;

pub use trait_def::Validate;
