//! Manifest loading and shape validation
//!
//! The file is read in one call and decoded into a generic JSON value first;
//! the value is then checked against the expected shape (object of string
//! arrays) so a malformed manifest fails with an error naming the class and
//! method index instead of producing wrong source.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use super::types::{Manifest, TestClass};
use crate::errors::{ManifestError, ManifestResult};

/// Read and validate a manifest file
///
/// # Errors
///
/// * [`ManifestError::NotFound`] / [`ManifestError::Io`] if the file cannot be read
/// * [`ManifestError::JsonParse`] if the content is not valid UTF-8 JSON
/// * a shape error if the document is not an object of string arrays
pub fn load_manifest<P: AsRef<Path>>(path: P) -> ManifestResult<Manifest> {
    let path = path.as_ref();
    debug!("Reading manifest from {}", path.display());

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ManifestError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ManifestError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let manifest = parse_manifest(&bytes, path)?;

    let stats = manifest.stats();
    info!(
        "Loaded manifest {}: {} classes ({} with methods, {} empty), {} methods",
        path.display(),
        stats.classes,
        stats.renderable_classes(),
        stats.empty_classes,
        stats.methods
    );

    Ok(manifest)
}

/// Decode manifest bytes; `origin` is only used for error reporting
pub fn parse_manifest(bytes: &[u8], origin: &Path) -> ManifestResult<Manifest> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|source| ManifestError::JsonParse {
            path: origin.to_path_buf(),
            source,
        })?;

    manifest_from_value(value)
}

/// Validate an already decoded JSON value
pub fn manifest_from_value(value: Value) -> ManifestResult<Manifest> {
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(ManifestError::NotAnObject {
                found: describe(&other).to_string(),
            });
        }
    };

    let mut classes = Vec::with_capacity(object.len());
    for (class, methods) in object {
        let methods = decode_methods(&class, methods)?;
        classes.push(TestClass::new(class, methods));
    }

    Ok(Manifest::new(classes))
}

fn decode_methods(class: &str, value: Value) -> ManifestResult<Vec<String>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ManifestError::InvalidMethodList {
                class: class.to_string(),
                found: describe(&other).to_string(),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(name) => Ok(name),
            other => Err(ManifestError::InvalidMethodName {
                class: class.to_string(),
                index,
                found: describe(&other).to_string(),
            }),
        })
        .collect()
}

/// Human-readable JSON type name used in shape errors
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
