//! Test Module
//!
//! Cross-module test suite for the Solace shaping core.
//!
//! ## Test Categories
//! - `shaping_tests`: sufficiency classification, question bank, reply structuring
//! - `config_tests`: environment-driven configuration

pub mod shaping_tests;
