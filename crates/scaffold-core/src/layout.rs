//! The layout tree: what a scaffold should look like on disk.
//!
//! A layout is a tree of [`LayoutNode`]s. A [`LayoutNode::Directory`] maps names
//! to child nodes; a [`LayoutNode::Files`] group lists empty files to create
//! directly inside the directory that holds it.
//!
//! ## JSON encoding
//!
//! Layout files are plain JSON: objects are directories, arrays of strings are
//! file groups. Object key order is kept and is the order of traversal.
//!
//! ```text
//! {
//!   "backend": {
//!     "src": {
//!       "models": { ".": ["User.js"] },
//!       ".": ["app.js"]
//!     },
//!     ".": [".env", "server.js"]
//!   }
//! }
//! ```
//!
//! The key of a file group never becomes part of a path, so `"."` is used by
//! convention. `"models": ["User.js"]` would put `User.js` next to `models`,
//! not inside it.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Conventional key for a file group inside a directory mapping.
pub const FILES_KEY: &str = ".";

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutNode {
    /// Named children, visited in insertion order.
    Directory(IndexMap<String, LayoutNode>),
    /// Empty files created in the enclosing directory.
    Files(Vec<String>),
}

impl LayoutNode {
    /// Build a directory node from `(name, child)` pairs, keeping their order.
    pub fn directory<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, LayoutNode)>,
        K: Into<String>,
    {
        Self::Directory(
            entries
                .into_iter()
                .map(|(name, child)| (name.into(), child))
                .collect(),
        )
    }

    /// Build a file group.
    pub fn files<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Files(names.into_iter().map(Into::into).collect())
    }

    /// Parse a layout from its JSON encoding.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode the layout as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load and validate a layout file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::LayoutNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let layout = Self::from_json(&contents).map_err(|e| ScaffoldError::LayoutParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        layout.validate()?;
        tracing::debug!(path = %path.display(), "loaded layout file");
        Ok(layout)
    }

    /// Reject names that would escape the base directory or name nothing.
    ///
    /// Directory keys and file names must be non-empty, relative, and free of
    /// `..` components. File group keys are not checked since they are never
    /// joined onto a path.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Directory(entries) => {
                for (name, child) in entries {
                    match child {
                        Self::Directory(_) => check_name(name)?,
                        Self::Files(_) if name != FILES_KEY => {
                            tracing::warn!(
                                key = %name,
                                "file group key is ignored; files go into the enclosing directory"
                            );
                        }
                        Self::Files(_) => {}
                    }
                    child.validate()?;
                }
            }
            Self::Files(names) => {
                for name in names {
                    check_name(name)?;
                }
            }
        }
        Ok(())
    }

    /// List every directory and file a build under `base` would touch.
    ///
    /// Entries come in traversal order. `base` itself is not listed.
    pub fn plan(&self, base: &Path) -> Vec<PlannedPath> {
        let mut planned = Vec::new();
        self.plan_into(base, &mut planned);
        planned
    }

    fn plan_into(&self, base: &Path, planned: &mut Vec<PlannedPath>) {
        match self {
            Self::Directory(entries) => {
                for (name, child) in entries {
                    match child {
                        Self::Directory(_) => {
                            let dir = base.join(name);
                            planned.push(PlannedPath::Directory(dir.clone()));
                            child.plan_into(&dir, planned);
                        }
                        Self::Files(_) => child.plan_into(base, planned),
                    }
                }
            }
            Self::Files(names) => {
                planned.extend(names.iter().map(|name| PlannedPath::File(base.join(name))));
            }
        }
    }
}

fn check_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if path
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
    {
        Some("absolute paths are not allowed")
    } else if path.components().any(|c| c == Component::ParentDir) {
        Some("'..' components are not allowed")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ScaffoldError::InvalidEntry {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// A path a build would create or touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedPath {
    Directory(PathBuf),
    File(PathBuf),
}

impl PlannedPath {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::File(path) => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

impl fmt::Display for PlannedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(path) => write!(f, "{}/", path.display()),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LayoutNode {
        LayoutNode::directory([(
            "app",
            LayoutNode::directory([
                (
                    "src",
                    LayoutNode::directory([
                        ("models", LayoutNode::directory([(FILES_KEY, LayoutNode::files(["User.js"]))])),
                        (FILES_KEY, LayoutNode::files(["app.js"])),
                    ]),
                ),
                (FILES_KEY, LayoutNode::files([".env"])),
            ]),
        )])
    }

    #[test]
    fn test_json_objects_are_directories_and_arrays_are_files() {
        let layout = LayoutNode::from_json(r#"{ "a": { ".": ["x", "y"] } }"#).unwrap();
        let LayoutNode::Directory(root) = &layout else {
            panic!("expected a directory at the root");
        };
        assert_eq!(root["a"], LayoutNode::directory([(".", LayoutNode::files(["x", "y"]))]));
    }

    #[test]
    fn test_json_keeps_key_order() {
        let layout = LayoutNode::from_json(r#"{ "zeta": {}, "alpha": {}, "mid": {} }"#).unwrap();
        let LayoutNode::Directory(root) = layout else {
            panic!("expected a directory at the root");
        };
        let keys: Vec<&str> = root.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_json_rejects_non_layout_values() {
        assert!(LayoutNode::from_json(r#"{ "a": 1 }"#).is_err());
        assert!(LayoutNode::from_json(r#"{ "a": [1, 2] }"#).is_err());
        assert!(LayoutNode::from_json("not json").is_err());
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let layout = sample();
        let json = layout.to_json_pretty().unwrap();
        assert_eq!(LayoutNode::from_json(&json).unwrap(), layout);
    }

    #[test]
    fn test_plan_lists_directories_and_files_in_order() {
        let planned = sample().plan(Path::new("root"));
        assert_eq!(
            planned,
            vec![
                PlannedPath::Directory(PathBuf::from("root/app")),
                PlannedPath::Directory(PathBuf::from("root/app/src")),
                PlannedPath::Directory(PathBuf::from("root/app/src/models")),
                PlannedPath::File(PathBuf::from("root/app/src/models/User.js")),
                PlannedPath::File(PathBuf::from("root/app/src/app.js")),
                PlannedPath::File(PathBuf::from("root/app/.env")),
            ]
        );
    }

    #[test]
    fn test_plan_ignores_file_group_key() {
        let layout = LayoutNode::directory([("models", LayoutNode::files(["User.js"]))]);
        assert_eq!(
            layout.plan(Path::new("base")),
            vec![PlannedPath::File(PathBuf::from("base/User.js"))]
        );
    }

    #[test]
    fn test_planned_path_display_marks_directories() {
        assert_eq!(PlannedPath::Directory(PathBuf::from("a/b")).to_string(), "a/b/");
        assert_eq!(PlannedPath::File(PathBuf::from("a/b.js")).to_string(), "a/b.js");
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_named_file_group_key() {
        let layout = LayoutNode::from_json(r#"{ "models": ["User.js"] }"#).unwrap();
        assert!(layout.validate().is_ok());
        assert_eq!(
            layout.plan(Path::new("base")),
            vec![PlannedPath::File(PathBuf::from("base/User.js"))]
        );
    }

    #[test]
    fn test_validate_rejects_parent_components() {
        let layout = LayoutNode::directory([("..", LayoutNode::Directory(IndexMap::new()))]);
        let err = layout.validate().unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidEntry { ref name, .. } if name == ".."));

        let layout = LayoutNode::directory([(FILES_KEY, LayoutNode::files(["../escape.js"]))]);
        assert!(matches!(
            layout.validate(),
            Err(ScaffoldError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_absolute_and_empty_names() {
        let layout = LayoutNode::directory([(FILES_KEY, LayoutNode::files(["/etc/passwd"]))]);
        assert!(matches!(
            layout.validate(),
            Err(ScaffoldError::InvalidEntry { .. })
        ));

        let layout = LayoutNode::directory([(FILES_KEY, LayoutNode::files([""]))]);
        assert!(matches!(
            layout.validate(),
            Err(ScaffoldError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = LayoutNode::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ScaffoldError::LayoutNotFound { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "{ \"a\": ").unwrap();
        assert!(matches!(
            LayoutNode::load(&path),
            Err(ScaffoldError::LayoutParse { .. })
        ));
    }

    #[test]
    fn test_load_validates_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{ "ok": { ".": ["../x"] } }"#).unwrap();
        assert!(matches!(
            LayoutNode::load(&path),
            Err(ScaffoldError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, sample().to_json_pretty().unwrap()).unwrap();
        assert_eq!(LayoutNode::load(&path).unwrap(), sample());
    }
}
