//! Command-line interface components
//!
//! This module contains CLI-specific code for the generator: argument parsing
//! and the render command handler.

pub mod args;
pub mod commands;

pub use args::{Cli, GlobalArgs, TemplateArgs};
pub use commands::{apply_overrides, handle_render, write_output};
