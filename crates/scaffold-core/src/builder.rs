//! Realize a [`LayoutNode`] tree on disk.
//!
//! The walk is depth-first in insertion order. Directories are created with all
//! missing ancestors and existing ones are accepted. Files are opened with
//! create+append, so a missing file becomes an empty one and an existing file
//! keeps its contents.
//!
//! The first filesystem failure aborts the walk. Anything created before it is
//! left in place.

use std::fs::OpenOptions;
use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::layout::LayoutNode;

/// What a build did, counted per entry.
///
/// Each directory is counted once, in either `directories_created` or
/// `directories_existing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub directories_created: usize,
    pub directories_existing: usize,
    pub files_created: usize,
    pub files_preserved: usize,
}

impl BuildSummary {
    /// True when the build found everything already in place.
    pub fn is_unchanged(&self) -> bool {
        self.directories_created == 0 && self.files_created == 0
    }
}

/// Create every directory and file described by `node` under `base`.
pub fn build(base: &Path, node: &LayoutNode) -> Result<BuildSummary> {
    let mut summary = BuildSummary::default();
    build_into(base, node, false, &mut summary)?;

    tracing::info!(
        base = %base.display(),
        directories_created = summary.directories_created,
        files_created = summary.files_created,
        files_preserved = summary.files_preserved,
        "layout built"
    );
    Ok(summary)
}

/// `base_ready` is true once `base` has been created or found on disk during
/// this build, so each directory is ensured (and counted) once.
fn build_into(
    base: &Path,
    node: &LayoutNode,
    base_ready: bool,
    summary: &mut BuildSummary,
) -> Result<()> {
    match node {
        LayoutNode::Directory(entries) => {
            let mut base_ready = base_ready;
            for (name, child) in entries {
                // Creating any child also creates `base`.
                match child {
                    LayoutNode::Directory(_) => {
                        let dir = base.join(name);
                        ensure_dir(&dir, summary)?;
                        build_into(&dir, child, true, summary)?;
                        base_ready = true;
                    }
                    // A file group lands in the directory that holds it.
                    LayoutNode::Files(_) => {
                        build_into(base, child, base_ready, summary)?;
                        base_ready = true;
                    }
                }
            }
        }
        LayoutNode::Files(names) => {
            if !base_ready {
                ensure_dir(base, summary)?;
            }
            for name in names {
                touch(&base.join(name), summary)?;
            }
        }
    }
    Ok(())
}

fn ensure_dir(dir: &Path, summary: &mut BuildSummary) -> Result<()> {
    if dir.is_dir() {
        summary.directories_existing += 1;
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|e| ScaffoldError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %dir.display(), "created directory");
    summary.directories_created += 1;
    Ok(())
}

fn touch(path: &Path, summary: &mut BuildSummary) -> Result<()> {
    let existed = path.exists();

    // Append mode never truncates what is already there.
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ScaffoldError::CreateFile {
            path: path.to_path_buf(),
            source: e,
        })?;

    if existed {
        tracing::debug!(path = %path.display(), "kept existing file");
        summary.files_preserved += 1;
    } else {
        tracing::debug!(path = %path.display(), "created file");
        summary.files_created += 1;
    }
    Ok(())
}
