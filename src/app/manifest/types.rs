//! Core types for test manifests
//!
//! A manifest maps test-class names to the ordered method names each class
//! registers. Class order follows the JSON document and method order follows
//! each array; nothing is sorted or deduplicated.

/// A single test class and its method names, as listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestClass {
    /// Test class identifier (e.g., "ConnectionTests")
    pub name: String,
    /// Method names in manifest order, possibly ending in `()`
    pub methods: Vec<String>,
}

impl TestClass {
    /// Create a new test class entry
    pub fn new(name: impl Into<String>, methods: Vec<String>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }

    /// Whether the class lists no methods at all
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Ordered, read-only view of a decoded manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    classes: Vec<TestClass>,
}

impl Manifest {
    /// Build a manifest from already decoded classes, keeping their order
    pub fn new(classes: Vec<TestClass>) -> Self {
        Self { classes }
    }

    /// Build a manifest from `(class, methods)` pairs
    ///
    /// ```rust
    /// use testmain_gen::app::manifest::Manifest;
    ///
    /// let manifest = Manifest::from_entries([
    ///     ("FooTests", vec!["testA()", "testB"]),
    ///     ("BarTests", vec![]),
    /// ]);
    /// assert_eq!(manifest.len(), 2);
    /// assert_eq!(manifest.stats().empty_classes, 1);
    /// ```
    pub fn from_entries<I, C, M>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, Vec<M>)>,
        C: Into<String>,
        M: Into<String>,
    {
        let classes = entries
            .into_iter()
            .map(|(name, methods)| {
                TestClass::new(name, methods.into_iter().map(Into::into).collect())
            })
            .collect();
        Self { classes }
    }

    /// Classes in manifest order
    pub fn classes(&self) -> &[TestClass] {
        &self.classes
    }

    /// Number of classes, including empty ones
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the manifest has no classes
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Summary counts for logging
    pub fn stats(&self) -> ManifestStats {
        ManifestStats {
            classes: self.classes.len(),
            empty_classes: self.classes.iter().filter(|c| c.is_empty()).count(),
            methods: self.classes.iter().map(|c| c.methods.len()).sum(),
        }
    }
}

/// Statistics about a decoded manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestStats {
    /// Classes found in the document
    pub classes: usize,
    /// Classes whose method list is empty
    pub empty_classes: usize,
    /// Method names across all classes, duplicates included
    pub methods: usize,
}

impl ManifestStats {
    /// Classes that will produce a test case block
    pub fn renderable_classes(&self) -> usize {
        self.classes - self.empty_classes
    }
}
