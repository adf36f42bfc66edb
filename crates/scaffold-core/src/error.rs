//! Unified error types for the scaffold toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while loading or building a layout.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Build ---

    /// A directory (or one of its ancestors) could not be created.
    ///
    /// Also returned when a regular file sits where a directory is expected.
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be created or opened for append.
    #[error("failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Layout files ---

    /// The layout file does not exist or could not be read.
    #[error("layout file not found at {path}")]
    LayoutNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The layout file exists but is not a valid layout document.
    #[error("failed to parse layout at {path}")]
    LayoutParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A directory or file name in a layout was rejected.
    #[error("invalid layout entry {name:?}: {reason}")]
    InvalidEntry { name: String, reason: &'static str },

    // --- Presets ---

    /// No built-in preset has this name.
    #[error("unknown preset: {0} (run `scaffold presets` to list them)")]
    UnknownPreset(String),

    /// An embedded preset failed to parse.
    #[error("built-in preset '{name}' is malformed")]
    PresetParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
