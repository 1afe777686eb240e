#![deny(missing_docs)]

//! # Merge Command
//!
//! Deep-merges patch documents into a base document, left to right.

use crate::output::emit;
use refpath_core::{load_document, merge_values, AppResult};
use std::path::PathBuf;

/// Arguments for the merge command.
#[derive(clap::Args, Debug, Clone)]
pub struct MergeArgs {
    /// Base document.
    pub base: PathBuf,

    /// Patch documents; later patches win.
    #[clap(required = true)]
    pub patches: Vec<PathBuf>,

    /// Output path (.json / .yaml / .yml). Prints JSON to stdout if omitted.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

/// Executes the merge.
pub fn execute(args: &MergeArgs) -> AppResult<()> {
    let mut merged = load_document(&args.base)?;
    for patch_path in &args.patches {
        tracing::debug!(patch = %patch_path.display(), "applying patch");
        merged = merge_values(merged, load_document(patch_path)?);
    }
    emit(&merged, args.output.as_deref())
}
