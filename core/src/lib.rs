#![deny(missing_docs)]

//! # Refpath Core
//!
//! Reference-resolution primitives for OpenAPI, AsyncAPI and JSON Schema tooling:
//! path normalization, JSON Pointer / JSON Reference handling, and path-addressed
//! reads, writes and merges over `serde_json::Value` trees.

/// Shared error types.
pub mod error;

/// Path, URL, pointer and reference handling.
pub mod refs;

/// Path-addressed access and deep merge over document trees.
pub mod tree;

/// Document loading and classification.
pub mod document;

pub use document::{classify_document, load_document, parse_document, DocumentKind};
pub use error::{AppError, AppResult};
pub use refs::{
    build_pointer, build_ref, create_ref, is_local_ref, is_valid_url, normalize, parse_pointer,
    parse_ref, relative_path, ParsedRef,
};
pub use tree::{
    force_container_at, get_value_by_path, get_value_by_path_mut, get_value_by_pointer,
    merge_values, merge_values_ref, set_value_by_path, set_value_by_pointer, ObjPath, PathKey,
};
