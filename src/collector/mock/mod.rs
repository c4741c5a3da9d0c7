//! Mock command execution for testing.
//!
//! This module provides `MockRunner` and pre-built scenarios for testing
//! collectors without invoking real platform utilities.

mod runner;
mod scenarios;

pub use runner::MockRunner;
