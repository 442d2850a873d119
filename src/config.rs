//! Configuration management for the test manifest generator
//!
//! Settings come from, in increasing precedence: built-in defaults, a TOML
//! config file given with `--config`, and command-line flags. Without
//! `--config` the generated source matches the historical template exactly.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::TemplateConfig;
use crate::constants::{logging, DEFAULT_TESTED_MODULE, DEFAULT_TEST_MODULE};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Generated source template settings
    pub template: TemplateConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly template configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateConfigToml {
    /// Module providing the test runner (`import <test_module>`)
    pub test_module: String,
    /// Module under test (`@testable import <tested_module>`)
    pub tested_module: String,
}

impl Default for TemplateConfigToml {
    fn default() -> Self {
        Self {
            test_module: DEFAULT_TEST_MODULE.to_string(),
            tested_module: DEFAULT_TESTED_MODULE.to_string(),
        }
    }
}

impl TemplateConfigToml {
    /// Convert TOML-friendly configuration to runtime configuration
    pub fn to_runtime_config(&self) -> TemplateConfig {
        TemplateConfig {
            test_module: self.test_module.clone(),
            tested_module: self.tested_module.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level, falling back to WARN for unvalidated input
    pub fn level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::WARN)
    }
}

impl AppConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. The config file named with `--config`, if any
    ///
    /// No other location is searched, so without `--config` the manifest is
    /// the only file read. CLI overrides are applied by the caller afterwards.
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        let config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check values that would otherwise produce broken source
    pub fn validate(&self) -> ConfigResult<()> {
        validate_module_name("template.test_module", &self.template.test_module)?;
        validate_module_name("template.tested_module", &self.template.tested_module)?;

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: "Expected one of: error, warn, info, debug, trace".to_string(),
            });
        }

        Ok(())
    }

    /// Runtime template settings
    pub fn template_config(&self) -> TemplateConfig {
        self.template.to_runtime_config()
    }

    /// Load configuration from a TOML file
    fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        debug!("Parsing configuration file {}", path.display());
        Self::from_toml_str(&content)
    }
}

fn validate_module_name(field: &str, value: &str) -> ConfigResult<()> {
    let reason = if value.is_empty() {
        "Module name must not be empty"
    } else if value.chars().any(char::is_whitespace) {
        "Module name must not contain whitespace"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}
