use std::path::Path;

use tokio::process::Command;
use tracing::{error, info};

use crate::config::CloneConfig;
use crate::contract::{AcquireError, AcquiredRepo, Acquirer, RepoSource};

const TEMP_PREFIX: &str = "gittomd-";

/// Shallow-clones GitHub repositories into fresh temporary directories.
/// Local sources are handed out in place, like [`LocalAcquirer`].
pub struct GitAcquirer {
    config: CloneConfig,
}

impl GitAcquirer {
    pub fn new(config: CloneConfig) -> Self {
        Self { config }
    }

    fn clone_args(&self, url: &str) -> Vec<String> {
        let mut args = vec!["clone".to_string()];
        if self.config.depth > 0 {
            args.push("--depth".to_string());
            args.push(self.config.depth.to_string());
        }
        if let Some(reference) = &self.config.reference {
            args.push("--branch".to_string());
            args.push(reference.clone());
        }
        args.push(url.to_string());
        args.push(".".to_string());
        args
    }
}

#[async_trait::async_trait]
impl Acquirer for GitAcquirer {
    async fn acquire(&self, source: &RepoSource) -> Result<AcquiredRepo, AcquireError> {
        let id = match source {
            RepoSource::GitHub(id) => id,
            RepoSource::Local(path) => return acquire_local(path),
        };

        let temp_dir = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempdir()
            .map_err(|e| {
                error!(error = ?e, "Failed to create temporary directory");
                AcquireError::TempDir(e)
            })?;

        let url = id.clone_url();
        let output = Command::new(&self.config.git_binary)
            .args(self.clone_args(&url))
            .current_dir(temp_dir.path())
            .output()
            .await;

        // The temp dir is dropped (and removed) on every early return below.
        match output {
            Ok(out) if out.status.success() => {
                info!(
                    repo_url = %url,
                    reference = ?self.config.reference,
                    path = %temp_dir.path().display(),
                    "Successfully cloned git repository"
                );
                Ok(AcquiredRepo::owned(temp_dir, id.repo.clone()))
            }
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr).into_owned();
                error!(
                    repo_url = %url,
                    status = ?out.status,
                    stderr = %stderr.trim_end(),
                    "Git exited with non-zero code"
                );
                Err(AcquireError::Clone { url, stderr })
            }
            Err(e) => {
                error!(
                    error = ?e,
                    program = %self.config.git_binary,
                    repo_url = %url,
                    "Failed to launch git process"
                );
                Err(AcquireError::Spawn {
                    program: self.config.git_binary.clone(),
                    source: e,
                })
            }
        }
    }
}

/// Hands out an existing local directory without taking ownership of it.
#[derive(Debug, Default)]
pub struct LocalAcquirer;

#[async_trait::async_trait]
impl Acquirer for LocalAcquirer {
    async fn acquire(&self, source: &RepoSource) -> Result<AcquiredRepo, AcquireError> {
        match source {
            RepoSource::Local(path) => acquire_local(path),
            RepoSource::GitHub(id) => Err(AcquireError::NotADirectory(id.to_string().into())),
        }
    }
}

fn acquire_local(path: &Path) -> Result<AcquiredRepo, AcquireError> {
    if !path.is_dir() {
        error!(path = %path.display(), "Local repository path is not a directory");
        return Err(AcquireError::NotADirectory(path.to_path_buf()));
    }
    let display_name = local_display_name(path);
    info!(path = %path.display(), name = %display_name, "Using local repository directory");
    Ok(AcquiredRepo::borrowed(path, display_name))
}

/// Final component of the directory, resolving `.` and friends when possible.
pub fn local_display_name(path: &Path) -> String {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.display().to_string())
}
