//! Error types for the test manifest generator
//!
//! Every failure is fatal: errors are propagated to `main`, reported on stderr
//! and turned into a non-zero exit status. Variants carry enough context (path,
//! class name, method index) to point at the offending part of the manifest.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest loading and shape validation errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("Manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// I/O error reading manifest
    #[error("I/O error reading manifest {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON
    #[error("JSON parsing error in manifest {path}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level value is something other than an object
    #[error("Manifest must be a JSON object mapping test classes to method lists, found {found}")]
    NotAnObject { found: String },

    /// A class maps to something other than an array
    #[error("Methods for test class '{class}' must be an array of strings, found {found}")]
    InvalidMethodList { class: String, found: String },

    /// An array entry is not a string
    #[error("Method {index} of test class '{class}' must be a string, found {found}")]
    InvalidMethodName {
        class: String,
        index: usize,
        found: String,
    },
}

impl ManifestError {
    /// Whether the error comes from reading the file rather than its contents
    pub fn is_io(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Io { .. })
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: '{value}'. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the generated source failed
    #[error("Failed to write generated source")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Manifest(e) if e.is_io() => "io",
            AppError::Manifest(_) => "parse",
            AppError::Config(_) => "config",
            AppError::Io(_) => "output",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Manifest result type alias
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let not_found = AppError::from(ManifestError::NotFound {
            path: PathBuf::from("tests.json"),
        });
        assert_eq!(not_found.category(), "io");

        let shape = AppError::from(ManifestError::NotAnObject {
            found: "an array".to_string(),
        });
        assert_eq!(shape.category(), "parse");

        let config = AppError::from(ConfigError::NotFound {
            path: PathBuf::from("gen.toml"),
        });
        assert_eq!(config.category(), "config");

        let output = AppError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(output.category(), "output");
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = ManifestError::InvalidMethodName {
            class: "FooTests".to_string(),
            index: 2,
            found: "a number".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("FooTests"));
        assert!(message.contains("Method 2"));
        assert!(message.contains("a number"));
    }

    #[test]
    fn test_transparent_wrapping() {
        let inner = ManifestError::InvalidMethodList {
            class: "BarTests".to_string(),
            found: "a string".to_string(),
        };
        let expected = inner.to_string();
        let app_error: AppError = inner.into();
        assert_eq!(app_error.to_string(), expected);
    }
}
