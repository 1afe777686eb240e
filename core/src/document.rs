#![deny(missing_docs)]

//! # Documents
//!
//! Loading and dumping of JSON / YAML documents as `serde_json::Value` trees, and a
//! lightweight classifier telling OpenAPI, AsyncAPI and JSON Schema documents apart.
//! No network access is performed.

use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// The kind of a loaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// A full OpenAPI (or Swagger) document with `openapi` or `swagger`.
    OpenApi,
    /// An AsyncAPI document with `asyncapi`.
    AsyncApi,
    /// A standalone JSON Schema document.
    JsonSchema,
    /// Anything else.
    Unknown,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::OpenApi => "openapi",
            DocumentKind::AsyncApi => "asyncapi",
            DocumentKind::JsonSchema => "json-schema",
            DocumentKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

const SCHEMA_KEYWORDS: &[&str] = &[
    "$schema",
    "$id",
    "$ref",
    "type",
    "properties",
    "allOf",
    "anyOf",
    "oneOf",
];

/// Classifies a parsed document by its top-level keys.
pub fn classify_document(doc: &Value) -> DocumentKind {
    let Some(map) = doc.as_object() else {
        return DocumentKind::Unknown;
    };

    if map.contains_key("openapi") || map.contains_key("swagger") {
        DocumentKind::OpenApi
    } else if map.contains_key("asyncapi") {
        DocumentKind::AsyncApi
    } else if SCHEMA_KEYWORDS.iter().any(|k| map.contains_key(*k)) {
        DocumentKind::JsonSchema
    } else {
        DocumentKind::Unknown
    }
}

/// Parses JSON or YAML text into a tree.
///
/// YAML is a superset of JSON, so one parser covers both.
pub fn parse_document(text: &str) -> AppResult<Value> {
    let value: Value = serde_yaml::from_str(text)?;
    Ok(value)
}

/// Reads and parses a document from disk.
pub fn load_document(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::General(format!("Failed to read document {:?}: {}", path, e))
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded document");
    parse_document(&content)
}

/// Serializes a tree as pretty-printed JSON.
pub fn to_json(value: &Value) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serializes a tree as YAML.
pub fn to_yaml(value: &Value) -> AppResult<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Serializes a tree in the format implied by a file extension (`yaml`/`yml`, else JSON).
pub fn to_format_for(path: &Path, value: &Value) -> AppResult<String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => to_yaml(value),
        _ => to_json(value),
    }
}
