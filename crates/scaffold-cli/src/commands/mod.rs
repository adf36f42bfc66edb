//! CLI command implementations for scaffold.
//!
//! Each module corresponds to a subcommand (`scaffold <command>`).

pub mod create;
pub mod presets;
pub mod show;

use anyhow::Result;

use scaffold_core::layout::LayoutNode;
use scaffold_core::presets as builtin;

use crate::LayoutSource;

/// A resolved layout and the line to print once it is built.
pub struct Selected {
    pub layout: LayoutNode,
    pub confirmation: String,
}

/// Load the layout named by `--layout`, `--preset`, or the default preset.
pub fn resolve_layout(source: &LayoutSource) -> Result<Selected> {
    if let Some(path) = &source.layout {
        return Ok(Selected {
            layout: LayoutNode::load(path)?,
            confirmation: "Folder structure created successfully.".to_string(),
        });
    }

    let name = source.preset.as_deref().unwrap_or(builtin::DEFAULT);
    let preset = builtin::find(name)?;
    tracing::debug!(preset = preset.name, "using built-in preset");
    Ok(Selected {
        layout: preset.layout()?,
        confirmation: preset.confirmation(),
    })
}
