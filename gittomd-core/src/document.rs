//! Assembles a walk into the final Markdown document.
//!
//! Shape of the output:
//!
//! ````text
//! # Repository: {name}
//!
//! ## File Structure
//!
//! ```text
//! {name}/
//! {tree}
//! ```
//!
//! ## `{relative path}`
//! ...
//! ````
//!
//! File blocks follow README.md first, then [`compare_paths`] order. A file that
//! cannot be read is skipped and listed in [`Document::skipped`] for the caller
//! to report; it never aborts the document.

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::classify::language_tag;
use crate::collate::compare_paths;
use crate::contract::{FileEntry, WalkError};
use crate::walk::{walk, Walk};

/// The generated document as ordered sections, plus the files that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<String>,
    skipped: Vec<String>,
}

impl Document {
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Relative paths of eligible files whose content could not be read.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn text(&self) -> String {
        self.sections.join("\n")
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<Document> for String {
    fn from(doc: Document) -> Self {
        doc.text()
    }
}

fn is_readme(entry: &FileEntry) -> bool {
    entry.relative_path.to_lowercase() == "readme.md"
}

/// Sorts README.md first, everything else by [`compare_paths`]. Stable, so ties keep listing order.
pub fn sort_files(files: &mut [FileEntry]) {
    files.sort_by(|a, b| match (is_readme(a), is_readme(b)) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        (false, false) => compare_paths(&a.relative_path, &b.relative_path),
    });
}

/// One file block: heading with the path, then the content fenced with its extension.
pub fn format_file_block(relative_path: &str, content: &str) -> String {
    let language = language_tag(relative_path);
    format!("\n## `{relative_path}`\n\n```{language}\n{content}\n```")
}

/// Builds the document from an already completed walk.
pub fn assemble(walk: Walk, display_name: &str) -> Document {
    let mut doc = Document::default();
    doc.sections.push(format!("# Repository: {display_name}"));
    doc.sections.push("\n## File Structure\n".to_string());
    doc.sections.push("```text".to_string());
    doc.sections.push(format!("{display_name}/"));
    doc.sections.push(walk.tree.to_string().trim().to_string());
    doc.sections.push("```".to_string());

    let mut files = walk.files;
    sort_files(&mut files);

    for file in &files {
        match std::fs::read_to_string(&file.path) {
            Ok(content) => {
                debug!(path = %file.relative_path, size = content.len(), "Embedded file");
                doc.sections
                    .push(format_file_block(&file.relative_path, &content));
            }
            Err(e) => {
                debug!(error = ?e, path = %file.relative_path, "Could not read file. Skipping.");
                doc.skipped.push(file.relative_path.clone());
            }
        }
    }

    info!(
        embedded = files.len() - doc.skipped.len(),
        skipped = doc.skipped.len(),
        "Assembled document"
    );
    doc
}

/// Walks `root` and assembles the document in one call. Only listing failures are errors.
pub fn render_repository(root: &Path, display_name: &str) -> Result<Document, WalkError> {
    let walked = walk(root)?;
    Ok(assemble(walked, display_name))
}
