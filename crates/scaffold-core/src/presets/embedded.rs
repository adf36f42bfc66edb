//! Compile-time embedded preset layouts.
//!
//! Each constant loads a layout file from `templates/layouts/` via [`include_str!`]. The
//! paths are relative to this source file (`crates/scaffold-core/src/presets/embedded.rs`).
//!
//! Do NOT rename or move layout files without updating the `include_str!` path here.

pub const BACKEND: &str = include_str!("../../../../templates/layouts/backend.json");
pub const BACKEND_TS: &str = include_str!("../../../../templates/layouts/backend-ts.json");
pub const FRONTEND: &str = include_str!("../../../../templates/layouts/frontend.json");
