//! Test Manifest Generator Library
//!
//! Turns a JSON manifest of test classes and method names into the source of
//! an XCTest `XCTMain` entry point, for platforms where tests cannot be
//! discovered at runtime. Used by the `generate-linux-tests` binary and
//! callable directly from build tooling.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
