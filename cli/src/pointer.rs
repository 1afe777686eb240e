#![deny(missing_docs)]

//! # Get & Set Commands
//!
//! Reads or writes a single location of a document addressed by a JSON Pointer.

use crate::output::emit;
use refpath_core::{
    get_value_by_pointer, load_document, set_value_by_pointer, AppError, AppResult,
};
use serde_json::Value;
use std::path::PathBuf;

/// Arguments for the get command.
#[derive(clap::Args, Debug, Clone)]
pub struct GetArgs {
    /// JSON or YAML document.
    pub file: PathBuf,

    /// Pointer to read, e.g. `/components/schemas/Pet`. Empty reads the whole document.
    #[clap(default_value = "")]
    pub pointer: String,
}

/// Arguments for the set command.
#[derive(clap::Args, Debug, Clone)]
pub struct SetArgs {
    /// JSON or YAML document.
    pub file: PathBuf,

    /// Pointer to write.
    pub pointer: String,

    /// Value to write, parsed as JSON (falls back to a plain string).
    pub value: String,

    /// Output path (.json / .yaml / .yml). Prints JSON to stdout if omitted.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

/// Prints the addressed value, failing when the pointer addresses nothing.
pub fn execute_get(args: &GetArgs) -> AppResult<()> {
    let doc = load_document(&args.file)?;
    let value = get_value_by_pointer(&doc, &args.pointer).ok_or_else(|| {
        AppError::NotFound(format!("{:?}#{}", args.file, args.pointer))
    })?;
    emit(value, None)
}

/// Writes the value and emits the updated document.
pub fn execute_set(args: &SetArgs) -> AppResult<()> {
    let mut doc = load_document(&args.file)?;
    let value = parse_value_arg(&args.value);
    set_value_by_pointer(&mut doc, &args.pointer, value);
    emit(&doc, args.output.as_deref())
}

fn parse_value_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value_arg() {
        assert_eq!(parse_value_arg("42"), json!(42));
        assert_eq!(parse_value_arg(r#"{"a": true}"#), json!({"a": true}));
        assert_eq!(parse_value_arg("plain text"), json!("plain text"));
    }

    #[test]
    fn test_set_writes_yaml_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.yaml");
        let output = dir.path().join("out.yaml");
        std::fs::write(&input, "info:\n  title: Pets\n").unwrap();

        let args = SetArgs {
            file: input,
            pointer: "/info/version".into(),
            value: "\"1.0\"".into(),
            output: Some(output.clone()),
        };
        execute_set(&args).unwrap();

        let written = load_document(&output).unwrap();
        assert_eq!(written, json!({"info": {"title": "Pets", "version": "1.0"}}));
    }

    #[test]
    fn test_get_missing_pointer_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.json");
        std::fs::write(&input, r#"{"a": 1}"#).unwrap();

        let args = GetArgs {
            file: input,
            pointer: "/b".into(),
        };
        assert!(matches!(execute_get(&args), Err(AppError::NotFound(_))));
    }
}
