//! Serialization module for reading and writing Swagger documents and their inputs.
//!
//! Documents are written as YAML or pretty-printed JSON. Registry and configuration files are
//! read as YAML when their extension says so and as JSON otherwise.

use crate::error::Result as LoadResult;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializes a document to YAML format.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Example
///
/// ```
/// use swagger_from_registry::serializer::serialize_yaml;
/// use serde_json::json;
///
/// let yaml = serialize_yaml(&json!({ "swagger": "2.0" })).unwrap();
/// assert!(yaml.contains("swagger:"));
/// ```
pub fn serialize_yaml<T: Serialize + ?Sized>(doc: &T) -> Result<String> {
    debug!("Serializing Swagger document to YAML");
    serde_yaml::to_string(doc).context("Failed to serialize Swagger document to YAML")
}

/// Serializes a document to JSON format with pretty printing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json<T: Serialize + ?Sized>(doc: &T) -> Result<String> {
    debug!("Serializing Swagger document to JSON");
    serde_json::to_string_pretty(doc).context("Failed to serialize Swagger document to JSON")
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does. Missing parent
/// directories are created.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Reads a file into `T`: YAML for `.yaml`/`.yml`, JSON for any other extension.
///
/// # Errors
///
/// Returns [`crate::error::Error::IoError`] when the file cannot be read and
/// [`crate::error::Error::SerializationError`] when it does not parse.
pub fn read_from_file<T>(path: &Path) -> LoadResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    debug!("Reading file: {}", path.display());
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        _ => Ok(serde_json::from_str(&content)?),
    }
}
