//! Command-line argument parsing for the test manifest generator
//!
//! The tool takes one positional argument, the manifest path. Everything else
//! is optional: verbosity flags, a config file, and template overrides.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Generate a Linux XCTest entry point from a test manifest
#[derive(Parser, Debug)]
#[command(
    name = "generate-linux-tests",
    version,
    about = "Render XCTest registration source from a JSON test manifest",
    long_about = "Reads a JSON object mapping test class names to method names and prints
the source of an XCTMain entry point registering every listed method. Classes
without methods are left out. Output goes to stdout, logs to stderr."
)]
pub struct Cli {
    /// Path to the JSON test manifest
    #[arg(value_name = "tests.json")]
    pub manifest: PathBuf,

    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Template overrides
    #[command(flatten)]
    pub template: TemplateArgs,
}

/// Logging and configuration options
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long)]
    pub very_verbose: bool,

    /// Quiet mode - only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Overrides for the module names in the generated source
#[derive(Args, Debug, Clone, Default)]
pub struct TemplateArgs {
    /// Module providing XCTMain (default: XCTest)
    #[arg(long, value_name = "NAME")]
    pub test_module: Option<String>,

    /// Module under test, imported with @testable (default: SQLiteTests)
    #[arg(long, value_name = "NAME")]
    pub tested_module: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level from the flags, or `default` when none is set
    pub fn log_level(&self, default: tracing::Level) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            default
        }
    }
}
