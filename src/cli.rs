/// # gittomd CLI Interface (Module)
///
/// Command parsing, configuration merging and user-visible reporting. The
/// repository-to-document pipeline itself lives in [`gittomd-core`]; this
/// module only decides where the repository comes from and where the
/// document goes.
///
/// [`gittomd-core`]: ../../gittomd-core/
use crate::load_config::{load_config, AppConfig, Overrides};
use crate::output::{self, Spinner};
use anyhow::{Context, Result};
use clap::Parser;
use gittomd_core::acquire::GitAcquirer;
use gittomd_core::contract::RepoSource;
use gittomd_core::document::Document;
use gittomd_core::pipeline::{generate_with_progress, Stage};
use gittomd_core::repo_id::RepoId;
use std::fmt;
use std::path::{Path, PathBuf};

/// Convert a GitHub repository into a single Markdown document.
#[derive(Debug, Parser)]
#[clap(
    name = "gittomd",
    version,
    about = "Convert a GitHub repository into a single Markdown document"
)]
pub struct Cli {
    /// GitHub repository URL, 'owner/repo' string, or path to a local directory
    pub repo: String,

    /// Output file path. If not provided, prints to stdout.
    #[clap(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Path to a YAML config file
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Clone depth (0 for full history)
    #[clap(long)]
    pub depth: Option<u32>,

    /// Branch or tag to clone
    #[clap(long)]
    pub branch: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the progress spinner
    #[clap(long)]
    pub no_spinner: bool,
}

/// The positional argument is neither a directory nor a GitHub identifier.
#[derive(Debug)]
pub struct InvalidRepoIdentifier(pub String);

impl fmt::Display for InvalidRepoIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid GitHub repository URL or format: {}", self.0)
    }
}

impl std::error::Error for InvalidRepoIdentifier {}

/// Resolves the positional argument: an existing directory wins, then GitHub identifiers.
pub fn resolve_source(input: &str) -> Option<RepoSource> {
    let path = Path::new(input);
    if path.is_dir() {
        return Some(RepoSource::Local(path.to_path_buf()));
    }
    RepoId::parse(input).map(RepoSource::GitHub)
}

/// Extracted async CLI logic entrypoint for integration tests and main().
/// Errors are returned, not printed; main() reports them once.
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!(repo = %cli.repo, "trace_initialised");

    let source = resolve_source(&cli.repo)
        .ok_or_else(|| InvalidRepoIdentifier(cli.repo.clone()))?;

    let config = load_config(
        cli.config.as_deref(),
        Overrides {
            depth: cli.depth,
            reference: cli.branch.clone(),
            output: cli.output.clone(),
        },
    )?;

    let document = produce(&config, &source, !cli.no_spinner).await?;

    for skipped in document.skipped() {
        output::warning(&format!("Could not read file {skipped}. Skipping."));
    }

    emit(&document, config.output.as_deref())
}

async fn produce(config: &AppConfig, source: &RepoSource, spinner: bool) -> Result<Document> {
    let progress = Spinner::start(spinner, format!("Starting process for {source}"));
    let acquirer = GitAcquirer::new(config.clone.clone());
    let is_remote = matches!(source, RepoSource::GitHub(_));

    let result = generate_with_progress(&acquirer, source, |stage| match stage {
        Stage::Acquiring if is_remote => progress.stage("Cloning repository..."),
        Stage::Acquiring => progress.stage("Reading local directory..."),
        Stage::Generating => progress.stage("Analyzing files and generating Markdown..."),
    })
    .await;

    match result {
        Ok(doc) => {
            progress.succeed("Markdown generated successfully!");
            Ok(doc)
        }
        Err(e) => {
            progress.fail("An error occurred.");
            tracing::error!(error = %e, "Document generation failed");
            Err(anyhow::Error::new(e))
        }
    }
}

fn emit(document: &Document, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            std::fs::write(path, document.text())
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            output::success(&format!("Output saved to {}", path.display()));
        }
        None => {
            println!("{}", document.text());
        }
    }
    Ok(())
}
