#![deny(missing_docs)]

//! # Normalize & Resolve Commands
//!
//! Exposes path normalization and `$ref` resolution on the command line.

use refpath_core::{normalize, parse_ref, AppResult};

/// Arguments for the normalize command.
#[derive(clap::Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Paths to normalize, one result per line.
    #[clap(required = true)]
    pub paths: Vec<String>,
}

/// Arguments for the resolve command.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// The reference, e.g. `common.yaml#/components/schemas/Id`.
    pub reference: String,

    /// Location of the document containing the reference.
    #[clap(long, env = "REFPATH_BASE")]
    pub base: Option<String>,
}

/// Prints the normalized form of every path.
pub fn execute_normalize(args: &NormalizeArgs) -> AppResult<()> {
    for path in &args.paths {
        println!("{}", normalize(path));
    }
    Ok(())
}

/// Prints the resolved reference as JSON.
pub fn execute_resolve(args: &ResolveArgs) -> AppResult<()> {
    let parsed = parse_ref(&args.reference, args.base.as_deref());
    tracing::debug!(reference = %args.reference, normalized = %parsed.normalized, "resolved");
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}
