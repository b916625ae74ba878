use anyhow::{Context, Result};
use gittomd_core::config::CloneConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Environment variable overriding the git executable.
pub const GIT_BINARY_ENV: &str = "GITTOMD_GIT";

#[derive(Debug, Default, Deserialize)]
struct StaticConfig {
    #[serde(default)]
    clone: Option<CloneSection>,
    #[serde(default)]
    output: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct CloneSection {
    depth: Option<u32>,
    reference: Option<String>,
    git_binary: Option<String>,
}

/// Fully merged settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub clone: CloneConfig,
    pub output: Option<PathBuf>,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub depth: Option<u32>,
    pub reference: Option<String>,
    pub output: Option<PathBuf>,
}

/// Loads an optional YAML config file, then layers the environment and `overrides` on top.
///
/// Precedence, lowest first: built-in defaults, the file, `GITTOMD_GIT`, command-line flags.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> Result<AppConfig> {
    let static_conf = match path {
        Some(path) => read_static_config(path)?,
        None => {
            info!("No config file given, using defaults");
            StaticConfig::default()
        }
    };

    let mut config = AppConfig {
        clone: CloneConfig::default(),
        output: static_conf.output,
    };
    if let Some(section) = static_conf.clone {
        if let Some(depth) = section.depth {
            config.clone.depth = depth;
        }
        config.clone.reference = section.reference;
        if let Some(git_binary) = section.git_binary {
            config.clone.git_binary = git_binary;
        }
    }

    if let Ok(git_binary) = std::env::var(GIT_BINARY_ENV) {
        if !git_binary.trim().is_empty() {
            info!(git_binary = %git_binary, "Git binary overridden from environment");
            config.clone.git_binary = git_binary;
        }
    }

    if let Some(depth) = overrides.depth {
        config.clone.depth = depth;
    }
    if overrides.reference.is_some() {
        config.clone.reference = overrides.reference;
    }
    if overrides.output.is_some() {
        config.output = overrides.output;
    }

    config.clone.trace_loaded();
    Ok(config)
}

fn read_static_config(path: &Path) -> Result<StaticConfig> {
    info!(config_path = ?path, "Loading configuration from file");

    let content = fs::read_to_string(path).map_err(|e| {
        error!(error = ?e, config_path = ?path, "Failed to read config file");
        e
    })
    .with_context(|| format!("Failed to read config file {}", path.display()))?;

    // An empty file deserialises to null; treat it as "no settings".
    if content.trim().is_empty() {
        return Ok(StaticConfig::default());
    }

    let conf: StaticConfig = serde_yaml::from_str(&content).map_err(|e| {
        error!(error = ?e, config_path = ?path, "Failed to parse config YAML");
        anyhow::anyhow!("Failed to parse config YAML {}: {e}", path.display())
    })?;
    info!(config_path = ?path, "Parsed config YAML successfully");
    Ok(conf)
}
