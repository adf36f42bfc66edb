//! Core library for the scaffold toolkit.
//!
//! Provides the [`layout::LayoutNode`] tree that describes a folder structure, the
//! [`builder`] that realizes it on disk, and the built-in [`presets`].
//!
//! ```no_run
//! use std::path::Path;
//!
//! let preset = scaffold_core::presets::find(scaffold_core::presets::DEFAULT)?;
//! scaffold_core::builder::build(Path::new("."), &preset.layout()?)?;
//! # Ok::<(), scaffold_core::error::ScaffoldError>(())
//! ```

pub mod builder;
pub mod error;
pub mod layout;
pub mod presets;
