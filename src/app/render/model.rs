//! Method references and test groups derived from a manifest

use tracing::debug;

use crate::app::manifest::{Manifest, TestClass};
use crate::constants::template::CALL_SUFFIX;

/// One registered test method
///
/// `label` is the method name and `reference` the `Class.method` expression,
/// both with a trailing `()` removed. Only a literal suffix is stripped; any
/// other parentheses pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodReference {
    pub label: String,
    pub reference: String,
}

impl MethodReference {
    /// Build the reference for `method` on `class`
    pub fn new(class: &str, method: &str) -> Self {
        let name = strip_call_suffix(method);
        Self {
            label: name.to_string(),
            reference: format!("{}.{}", class, name),
        }
    }
}

/// Remove a single trailing `()` if present
pub fn strip_call_suffix(method: &str) -> &str {
    method.strip_suffix(CALL_SUFFIX).unwrap_or(method)
}

/// A test class with at least one method reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestGroup {
    class: String,
    methods: Vec<MethodReference>,
}

impl TestGroup {
    /// Build a group for `class`; `None` when the class has no methods
    pub fn from_class(class: &TestClass) -> Option<Self> {
        if class.is_empty() {
            return None;
        }

        let methods = class
            .methods
            .iter()
            .map(|method| MethodReference::new(&class.name, method))
            .collect();

        Some(Self {
            class: class.name.clone(),
            methods,
        })
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Never empty
    pub fn methods(&self) -> &[MethodReference] {
        &self.methods
    }
}

/// Turn a manifest into test groups, dropping classes without methods
///
/// Returns the groups in manifest order together with the names of the
/// classes that were dropped.
pub fn group_manifest(manifest: &Manifest) -> (Vec<TestGroup>, Vec<String>) {
    let mut groups = Vec::with_capacity(manifest.len());
    let mut skipped = Vec::new();

    for class in manifest.classes() {
        match TestGroup::from_class(class) {
            Some(group) => groups.push(group),
            None => {
                debug!("Skipping test class '{}' with no methods", class.name);
                skipped.push(class.name.clone());
            }
        }
    }

    (groups, skipped)
}
