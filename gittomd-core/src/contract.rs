//! # contract: shared types and seams of the gittomd pipeline
//!
//! Everything that crosses a stage boundary lives here:
//! - the data produced by the walker ([`FileEntry`], [`TreeFragment`]),
//! - the acquisition seam ([`Acquirer`], [`RepoSource`], [`AcquiredRepo`]),
//! - the error types of every stage.
//!
//! ## Mocking & Testing
//! - [`Acquirer`] is annotated for `mockall`, so tests can hand the pipeline a
//!   fixture directory instead of cloning anything.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use tempfile::TempDir;
use tracing::{debug, warn};

use crate::repo_id::RepoId;

/// One eligible text file discovered during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path used to read the content.
    pub path: PathBuf,
    /// Path relative to the repository root, `/`-separated; used for display and ordering.
    pub relative_path: String,
}

/// The connector-drawn rendering of the visible hierarchy, one line per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeFragment {
    lines: Vec<String>,
}

impl TreeFragment {
    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn append(&mut self, other: TreeFragment) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for TreeFragment {
    /// Every line is newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A directory could not be listed; aborts the whole walk.
#[derive(Debug)]
pub enum WalkError {
    ReadDir { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::ReadDir { path, .. } => {
                write!(f, "failed to list directory {}", path.display())
            }
        }
    }
}

impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WalkError::ReadDir { source, .. } => Some(source),
        }
    }
}

/// Where the repository content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    GitHub(RepoId),
    Local(PathBuf),
}

impl fmt::Display for RepoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoSource::GitHub(id) => write!(f, "{id}"),
            RepoSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A readable root directory handed out by an [`Acquirer`].
///
/// When the root is a temporary directory the value owns it: [`AcquiredRepo::release`]
/// removes it, and so does dropping an unreleased value.
#[derive(Debug)]
pub struct AcquiredRepo {
    root: PathBuf,
    display_name: String,
    guard: Option<TempDir>,
}

impl AcquiredRepo {
    /// A repository living in a temporary directory that is removed on release.
    pub fn owned(guard: TempDir, display_name: impl Into<String>) -> Self {
        Self {
            root: guard.path().to_path_buf(),
            display_name: display_name.into(),
            guard: Some(guard),
        }
    }

    /// A repository in a directory the caller does not own; release leaves it alone.
    pub fn borrowed(root: impl Into<PathBuf>, display_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            display_name: display_name.into(),
            guard: None,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Recursively removes an owned root. Removal failures are logged, never returned.
    pub fn release(self) {
        let Some(guard) = self.guard else {
            debug!(path = %self.root.display(), "Borrowed repository root left in place");
            return;
        };
        match guard.close() {
            Ok(()) => debug!(path = %self.root.display(), "Removed temporary repository root"),
            Err(e) => warn!(
                error = ?e,
                path = %self.root.display(),
                "Failed to remove temporary repository root"
            ),
        }
    }
}

/// Failure to produce a readable repository root.
#[derive(Debug)]
pub enum AcquireError {
    TempDir(std::io::Error),
    Spawn { program: String, source: std::io::Error },
    Clone { url: String, stderr: String },
    NotADirectory(PathBuf),
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquireError::TempDir(_) => write!(f, "failed to create temporary directory"),
            AcquireError::Spawn { program, .. } => write!(f, "failed to launch {program}"),
            AcquireError::Clone { url, stderr } => {
                write!(f, "Failed to clone repository: {url}")?;
                if !stderr.trim().is_empty() {
                    write!(f, "\n{}", stderr.trim_end())?;
                }
                Ok(())
            }
            AcquireError::NotADirectory(path) => {
                write!(f, "not a readable directory: {}", path.display())
            }
        }
    }
}

impl std::error::Error for AcquireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AcquireError::TempDir(e) | AcquireError::Spawn { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

/// Trait for acquiring a repository's working tree on the local filesystem.
/// Implemented by the git cloner, the local-directory passthrough, and mocks in tests.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Acquirer: Send + Sync {
    /// Produce a readable root directory for `source`. The caller must release it.
    async fn acquire(&self, source: &RepoSource) -> Result<AcquiredRepo, AcquireError>;
}

/// Errors surfaced by [`crate::pipeline::generate`]. Stage errors are wrapped transparently.
#[derive(Debug)]
pub enum PipelineError {
    Acquire(AcquireError),
    Walk(WalkError),
    Join(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Acquire(e) => write!(f, "{e}"),
            PipelineError::Walk(e) => write!(f, "{e}"),
            PipelineError::Join(msg) => write!(f, "document generation task failed: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Acquire(e) => std::error::Error::source(e),
            PipelineError::Walk(e) => std::error::Error::source(e),
            PipelineError::Join(_) => None,
        }
    }
}

impl From<AcquireError> for PipelineError {
    fn from(e: AcquireError) -> Self {
        PipelineError::Acquire(e)
    }
}

impl From<WalkError> for PipelineError {
    fn from(e: WalkError) -> Self {
        PipelineError::Walk(e)
    }
}
