//! Constants for the test manifest generator
//!
//! Template literals are reproduced exactly as the downstream Swift compiler
//! expects them; changing any character here changes the generated source.

/// Generated source template pieces
pub mod template {
    /// Module providing `XCTMain` and `testCase`
    pub const DEFAULT_TEST_MODULE: &str = "XCTest";

    /// Module under test, imported with `@testable`
    pub const DEFAULT_TESTED_MODULE: &str = "SQLiteTests";

    /// Opening of the registration call
    pub const REGISTRATION_OPEN: &str = "XCTMain([\n";

    /// Closing of the registration call
    pub const REGISTRATION_CLOSE: &str = "\n])\n";

    /// Opening of a single test case block
    pub const TEST_CASE_OPEN: &str = "testCase([\n";

    /// Closing of a single test case block
    pub const TEST_CASE_CLOSE: &str = "\n])";

    /// Separator between entries and between blocks
    pub const SEPARATOR: &str = ",\n";

    /// Indentation in front of every method entry
    pub const ENTRY_INDENT: &str = "    ";

    /// Suffix stripped from method names
    pub const CALL_SUFFIX: &str = "()";
}

/// Logging defaults
pub mod logging {
    /// Default log level when neither flags nor config choose one
    pub const DEFAULT_LOG_LEVEL: &str = "warn";

    /// Target used for the env-filter directive
    pub const LOG_TARGET: &str = "testmain_gen";
}

pub use template::{DEFAULT_TEST_MODULE, DEFAULT_TESTED_MODULE};
