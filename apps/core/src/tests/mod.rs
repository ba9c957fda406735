//! Test Module
//!
//! Cross-module test suite for the Prompty core.
//!
//! ## Test Categories
//! - `brain_tests`: Segmentation, classification, clarity, assembly and suggestions
//! - `session_tests`: Debounced realtime suggestions and session requests
//! - `host_tests`: Native-messaging framing and request dispatch
//! - `config_tests`: Environment parsing and validation

pub mod config_tests;
pub mod session_tests;
