//! Prelude module for the test manifest generator
//!
//! Re-exports the items needed to load a manifest and render it with a
//! single `use testmain_gen::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use testmain_gen::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = AppConfig::load(None)?;
//!     let rendered = render_file("tests.json", &config.template_config())?;
//!     print!("{}", rendered.text);
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, ConfigError, ManifestError, Result};

// Manifest and rendering
pub use crate::app::{
    load_manifest, render_file, render_manifest, Manifest, MethodReference, RenderStats,
    Rendered, TemplateConfig, TestClass, TestGroup,
};

// Configuration
pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{DEFAULT_TESTED_MODULE, DEFAULT_TEST_MODULE};

pub use std::path::{Path, PathBuf};
