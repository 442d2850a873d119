//! Source text template for the test runner entry point
//!
//! The generated file has this exact shape (module names configurable):
//!
//! ```text
//! import XCTest
//! @testable import SQLiteTests
//!
//! XCTMain([
//! testCase([
//!     ("testA", FooTests.testA),
//!     ("testB", FooTests.testB)
//! ])
//! ])
//! ```
//!
//! Entries and blocks are separated by `,\n` with no trailing separator.
//! Labels are emitted verbatim between the quotes.

use std::fmt::Write;

use super::model::{MethodReference, TestGroup};
use crate::constants::template::{
    DEFAULT_TESTED_MODULE, DEFAULT_TEST_MODULE, ENTRY_INDENT, REGISTRATION_CLOSE,
    REGISTRATION_OPEN, SEPARATOR, TEST_CASE_CLOSE, TEST_CASE_OPEN,
};

/// Module names substituted into the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Module imported with a plain `import`
    pub test_module: String,
    /// Module imported with `@testable import`
    pub tested_module: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            test_module: DEFAULT_TEST_MODULE.to_string(),
            tested_module: DEFAULT_TESTED_MODULE.to_string(),
        }
    }
}

impl TemplateConfig {
    /// Render the complete document for `groups`
    ///
    /// The result ends with `])\n`; callers printing it add one more newline.
    pub fn render(&self, groups: &[TestGroup]) -> String {
        let mut out = String::with_capacity(256 + groups.len() * 128);

        // Writing into a String cannot fail
        let _ = write!(
            out,
            "import {}\n@testable import {}\n\n",
            self.test_module, self.tested_module
        );
        out.push_str(REGISTRATION_OPEN);
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                out.push_str(SEPARATOR);
            }
            push_test_case(&mut out, group);
        }
        out.push_str(REGISTRATION_CLOSE);

        out
    }
}

fn push_test_case(out: &mut String, group: &TestGroup) {
    out.push_str(TEST_CASE_OPEN);
    for (i, method) in group.methods().iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        push_entry(out, method);
    }
    out.push_str(TEST_CASE_CLOSE);
}

fn push_entry(out: &mut String, method: &MethodReference) {
    out.push_str(ENTRY_INDENT);
    let _ = write!(out, "(\"{}\", {})", method.label, method.reference);
}
