//! Recursive traversal of a repository root.
//!
//! Trash is pruned before anything else happens to an entry, so pruned
//! directories are never opened. Surviving entries are drawn in listing order;
//! text files among them are collected for the assembler.

use std::fs;
use std::path::{Component, Path};

use tracing::{debug, error, info};

use crate::classify::{is_text_file, is_trash_file_or_dir};
use crate::contract::{FileEntry, TreeFragment, WalkError};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Output of a walk: the drawn hierarchy and the text files found in it.
#[derive(Debug, Clone, Default)]
pub struct Walk {
    pub tree: TreeFragment,
    pub files: Vec<FileEntry>,
}

/// Walks `root` and everything below it that is not trash.
pub fn walk(root: &Path) -> Result<Walk, WalkError> {
    info!(path = %root.display(), "Walking repository tree");
    let result = walk_dir(root, root, "")?;
    info!(
        lines = result.tree.lines().len(),
        files = result.files.len(),
        "Completed repository walk"
    );
    Ok(result)
}

/// Walks one directory level, drawing each entry under `prefix` and recursing into subdirectories.
pub fn walk_dir(dir: &Path, root: &Path, prefix: &str) -> Result<Walk, WalkError> {
    let read_dir_err = |source| WalkError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut visible = Vec::new();
    for entry_res in fs::read_dir(dir).map_err(|e| {
        error!(error = ?e, path = %dir.display(), "Failed to list directory");
        read_dir_err(e)
    })? {
        let entry = entry_res.map_err(read_dir_err)?;
        let path = entry.path();
        let relative_path = relative_to(&path, root);
        if is_trash_file_or_dir(&relative_path) {
            debug!(path = %relative_path, "Pruned trash entry");
            continue;
        }
        visible.push((entry, path, relative_path));
    }

    let mut result = Walk::default();
    let count = visible.len();
    for (i, (entry, path, relative_path)) in visible.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let (connector, continuation) = if is_last {
            (LAST_BRANCH, SPACE_INDENT)
        } else {
            (BRANCH, PIPE_INDENT)
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        result.tree.push_line(format!("{prefix}{connector}{name}"));

        // Symlinks are not followed: they are drawn, but neither descended into nor read.
        let file_type = entry.file_type().map_err(read_dir_err)?;
        if file_type.is_dir() {
            let nested = walk_dir(&path, root, &format!("{prefix}{continuation}"))?;
            result.tree.append(nested.tree);
            result.files.extend(nested.files);
        } else if file_type.is_file() && is_text_file(&name) {
            debug!(path = %relative_path, "Collected text file");
            result.files.push(FileEntry {
                path,
                relative_path,
            });
        }
    }
    Ok(result)
}

/// `path` relative to `root`, joined with `/` whatever the host separator.
pub fn relative_to(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
