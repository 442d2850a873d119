//! Command handler for the test manifest generator
//!
//! Renders the whole document into memory before touching stdout, so a
//! failing run never leaves partial source behind.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::app::{render_file, Rendered};
use crate::cli::{Cli, TemplateArgs};
use crate::config::AppConfig;
use crate::errors::Result;

/// Handle a render invocation
///
/// Applies CLI overrides on top of `config`, renders the manifest named on
/// the command line and writes the source to stdout followed by a newline.
pub fn handle_render(cli: &Cli, config: AppConfig) -> Result<()> {
    let config = apply_overrides(config, &cli.template);
    config.validate()?;

    let template = config.template_config();
    debug!(
        "Template modules: import {}, @testable import {}",
        template.test_module, template.tested_module
    );

    let rendered = render_file(&cli.manifest, &template)?;
    write_output(&mut io::stdout().lock(), &rendered)?;

    info!(
        "Wrote {} bytes of generated source for {}",
        rendered.text.len() + 1,
        cli.manifest.display()
    );
    Ok(())
}

/// Apply command-line template overrides to loaded configuration
pub fn apply_overrides(mut config: AppConfig, args: &TemplateArgs) -> AppConfig {
    if let Some(module) = &args.test_module {
        config.template.test_module = module.clone();
    }
    if let Some(module) = &args.tested_module {
        config.template.tested_module = module.clone();
    }
    config
}

/// Write rendered source and the trailing newline
pub fn write_output<W: Write>(out: &mut W, rendered: &Rendered) -> io::Result<()> {
    writeln!(out, "{}", rendered.text)?;
    out.flush()
}
