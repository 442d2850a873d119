//! Rendering of test runner registration source
//!
//! Converts a [`Manifest`] into the text of a `LinuxMain.swift`-style entry
//! point. Classes with no methods are dropped from the output; the names of
//! dropped classes are reported in [`RenderStats`] and at debug level so an
//! upstream manifest problem stays visible.

pub mod model;
pub mod template;

use std::path::Path;

use tracing::info;

use crate::app::manifest::{load_manifest, Manifest};
use crate::errors::ManifestResult;

pub use model::{group_manifest, strip_call_suffix, MethodReference, TestGroup};
pub use template::TemplateConfig;

/// Statistics about a render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Classes present in the manifest
    pub classes_seen: usize,
    /// Test case blocks emitted
    pub groups_rendered: usize,
    /// Method entries emitted
    pub methods_rendered: usize,
    /// Classes dropped because their method list was empty
    pub skipped_classes: Vec<String>,
}

/// Generated source together with what went into it
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Complete source text, ending in `])\n`
    pub text: String,
    pub stats: RenderStats,
}

/// Render an in-memory manifest
pub fn render_manifest(manifest: &Manifest, template: &TemplateConfig) -> Rendered {
    let (groups, skipped_classes) = group_manifest(manifest);
    let text = template.render(&groups);

    let stats = RenderStats {
        classes_seen: manifest.len(),
        groups_rendered: groups.len(),
        methods_rendered: groups.iter().map(|g| g.methods().len()).sum(),
        skipped_classes,
    };

    info!(
        "Rendered {} test cases with {} methods ({} empty classes skipped)",
        stats.groups_rendered,
        stats.methods_rendered,
        stats.skipped_classes.len()
    );

    Rendered { text, stats }
}

/// Load the manifest at `path` and render it
///
/// ```rust,no_run
/// use testmain_gen::app::render::{render_file, TemplateConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let rendered = render_file("tests.json", &TemplateConfig::default())?;
/// println!("{}", rendered.text);
/// # Ok(())
/// # }
/// ```
pub fn render_file<P: AsRef<Path>>(path: P, template: &TemplateConfig) -> ManifestResult<Rendered> {
    let manifest = load_manifest(path)?;
    Ok(render_manifest(&manifest, template))
}
