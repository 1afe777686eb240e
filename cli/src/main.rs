#![deny(missing_docs)]

//! # Refpath CLI
//!
//! Command Line Interface over the reference-resolution primitives.
//!
//! Supported Commands:
//! - `normalize`: POSIX-style path normalization.
//! - `resolve`: Splits and resolves a `$ref` against a base location.
//! - `get` / `set`: Reads or writes a document location by JSON Pointer.
//! - `merge`: Deep-merges documents.
//! - `classify`: Reports whether a document is OpenAPI, AsyncAPI or JSON Schema.

use clap::{Parser, Subcommand};
use refpath_core::{classify_document, load_document, AppResult};
use std::path::PathBuf;

mod logging;
mod merge;
mod output;
mod pointer;
mod resolve;

#[derive(Parser, Debug)]
#[clap(author, version, about = "JSON Reference / JSON Pointer toolkit")]
struct Cli {
    /// Log level used when `RUST_LOG` is not set.
    #[clap(long, global = true, env = "REFPATH_LOG", default_value = "warn")]
    log_level: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize one or more paths.
    Normalize(resolve::NormalizeArgs),
    /// Resolve a `$ref` against a base location.
    Resolve(resolve::ResolveArgs),
    /// Print the value addressed by a JSON Pointer.
    Get(pointer::GetArgs),
    /// Write a value at a JSON Pointer.
    Set(pointer::SetArgs),
    /// Deep-merge patch documents into a base document.
    Merge(merge::MergeArgs),
    /// Classify a document.
    Classify {
        /// JSON or YAML document.
        file: PathBuf,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    match &cli.command {
        Commands::Normalize(args) => resolve::execute_normalize(args)?,
        Commands::Resolve(args) => resolve::execute_resolve(args)?,
        Commands::Get(args) => pointer::execute_get(args)?,
        Commands::Set(args) => pointer::execute_set(args)?,
        Commands::Merge(args) => merge::execute(args)?,
        Commands::Classify { file } => {
            let doc = load_document(file)?;
            println!("{}", classify_document(&doc));
        }
    }

    Ok(())
}
