//! Core application logic for the test manifest generator
//!
//! This module contains manifest loading and source rendering. Both are plain
//! synchronous functions so they can also be called from build scripts.
//!
//! # Examples
//!
//! ```rust,no_run
//! use testmain_gen::app::{load_manifest, render_manifest, TemplateConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = load_manifest("tests.json")?;
//! let rendered = render_manifest(&manifest, &TemplateConfig::default());
//!
//! for class in &rendered.stats.skipped_classes {
//!     eprintln!("no methods listed for {}", class);
//! }
//! println!("{}", rendered.text);
//! # Ok(())
//! # }
//! ```

pub mod manifest;
pub mod render;

// Re-export main public API
pub use manifest::{load_manifest, parse_manifest, Manifest, ManifestStats, TestClass};
pub use render::{
    group_manifest, render_file, render_manifest, MethodReference, RenderStats, Rendered,
    TemplateConfig, TestGroup,
};
