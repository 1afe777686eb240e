#![deny(missing_docs)]

//! # Output
//!
//! Writes result trees to a file or stdout.

use refpath_core::document::{to_format_for, to_json};
use refpath_core::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Writes `value` to `output` (format chosen by extension) or prints JSON to stdout.
pub fn emit(value: &Value, output: Option<&Path>) -> AppResult<()> {
    match output {
        Some(out_path) => {
            let rendered = to_format_for(out_path, value)?;
            fs::write(out_path, rendered).map_err(|e| {
                AppError::General(format!("Failed to write output {:?}: {}", out_path, e))
            })?;
            tracing::info!(path = %out_path.display(), "wrote document");
        }
        None => println!("{}", to_json(value)?),
    }
    Ok(())
}
