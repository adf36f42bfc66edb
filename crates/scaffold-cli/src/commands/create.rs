use std::path::Path;

use anyhow::{Context, Result};

use scaffold_core::builder;

use crate::output;
use crate::LayoutSource;

/// Create the selected layout under `root`.
///
/// Prints a single confirmation line once every directory and file is in
/// place. With `dry_run`, prints the planned paths instead and leaves the
/// disk untouched.
pub fn run(root: &Path, source: &LayoutSource, dry_run: bool) -> Result<()> {
    let selected = super::resolve_layout(source)?;

    if dry_run {
        for entry in selected.layout.plan(root) {
            output::print_planned(&entry);
        }
        return Ok(());
    }

    let summary = builder::build(root, &selected.layout)
        .with_context(|| format!("failed to create layout under {}", root.display()))?;
    tracing::debug!(?summary, "build finished");

    output::print_success(&selected.confirmation);
    Ok(())
}
