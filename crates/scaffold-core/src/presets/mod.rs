//! Built-in layouts.
//!
//! Presets are JSON layout documents embedded into the binary at compile time
//! (see [`embedded`]) and parsed on demand. They use the same encoding as user
//! layout files, so `scaffold show --preset <name>` is a valid starting point
//! for a custom `--layout` file.
//!
//! ## Adding a new preset
//!
//! 1. Place the layout under `templates/layouts/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Register it in [`PRESETS`]

pub mod embedded;

use crate::error::{Result, ScaffoldError};
use crate::layout::LayoutNode;

/// Preset used when no layout is selected.
pub const DEFAULT: &str = "backend";

/// A named, embedded layout.
#[derive(Debug)]
pub struct Preset {
    /// Name used on the command line.
    pub name: &'static str,
    /// One-line summary for `scaffold presets`.
    pub description: &'static str,
    /// What the preset creates, as shown in the confirmation line.
    pub label: &'static str,
    source: &'static str,
}

impl Preset {
    /// Parse the embedded layout.
    pub fn layout(&self) -> Result<LayoutNode> {
        LayoutNode::from_json(self.source).map_err(|e| ScaffoldError::PresetParse {
            name: self.name.to_string(),
            source: e,
        })
    }

    /// Line printed after the preset has been built.
    pub fn confirmation(&self) -> String {
        format!("{} folder structure created successfully.", self.label)
    }
}

/// All built-in presets, default first.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: DEFAULT,
        description: "Express backend: server.js, src/app.js, config, models, routes, middleware",
        label: "Backend",
        source: embedded::BACKEND,
    },
    Preset {
        name: "backend-ts",
        description: "TypeScript backend with controllers, socket, scripts, types and utils",
        label: "Backend",
        source: embedded::BACKEND_TS,
    },
    Preset {
        name: "frontend",
        description: "React frontend: components, hooks, lib and pages under src/",
        label: "Frontend",
        source: embedded::FRONTEND,
    },
];

/// Look up a preset by name.
pub fn find(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| ScaffoldError::UnknownPreset(name.to_string()))
}
