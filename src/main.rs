//! generate-linux-tests
//!
//! Build step that turns a JSON test manifest into an XCTest `XCTMain`
//! entry point. Generated source goes to stdout; logs and errors go to stderr.

use std::error::Error;
use std::process;

use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

use testmain_gen::cli::{handle_render, Cli};
use testmain_gen::config::{AppConfig, LoggingConfig};
use testmain_gen::constants::logging::LOG_TARGET;
use testmain_gen::errors::Result;

fn main() {
    // Usage errors exit here through clap, before anything is rendered
    let cli = Cli::parse_args();

    if let Err(e) = run(&cli) {
        error!(category = e.category(), "Generation failed");
        eprintln!("Error: {}", e);

        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  Caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

/// Main application logic
fn run(cli: &Cli) -> Result<()> {
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // Flags alone decide the level when the config file is unusable
            init_logging(cli, &LoggingConfig::default());
            return Err(e.into());
        }
    };

    init_logging(cli, &config.logging);

    info!("generate-linux-tests v{} starting", env!("CARGO_PKG_VERSION"));
    match &cli.global.config {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => debug!("No config file given, using defaults"),
    }

    handle_render(cli, config)
}

/// Initialize logging based on CLI verbosity and configured level
fn init_logging(cli: &Cli, logging: &LoggingConfig) {
    let log_level = cli.log_level(logging.level());

    let mut filter = EnvFilter::from_default_env();
    for target in [LOG_TARGET, env!("CARGO_CRATE_NAME")] {
        if let Ok(directive) = format!("{}={}", target, log_level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    // stdout carries the generated source
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .init();
}
