//! Test manifest processing
//!
//! This module reads the JSON manifest that lists, per test class, the methods
//! to register with the test runner. Loading is a single synchronous read
//! followed by an explicit shape check.
//!
//! # Examples
//!
//! ```rust,no_run
//! use testmain_gen::app::manifest::load_manifest;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = load_manifest("tests.json")?;
//! for class in manifest.classes() {
//!     println!("{}: {} methods", class.name, class.methods.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use loader::{load_manifest, manifest_from_value, parse_manifest};
pub use types::{Manifest, ManifestStats, TestClass};
