use serde::{Deserialize, Serialize};
use tracing::{debug, info};

fn default_depth() -> u32 {
    1
}

fn default_git_binary() -> String {
    "git".to_string()
}

/// How a GitHub repository is cloned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneConfig {
    /// `--depth` passed to `git clone`; 0 means a full clone.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Branch or tag to clone instead of the remote's default branch.
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default = "default_git_binary")]
    pub git_binary: String,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            reference: None,
            git_binary: default_git_binary(),
        }
    }
}

impl CloneConfig {
    pub fn trace_loaded(&self) {
        info!(
            depth = self.depth,
            reference = ?self.reference,
            git_binary = %self.git_binary,
            "Loaded CloneConfig"
        );
        debug!(?self, "CloneConfig loaded (full debug)");
    }
}
