//! High-level pipeline: acquire → walk → assemble → release.
//!
//! [`generate`] is the single entrypoint used by the CLI and by integration
//! tests. The acquired root is always released, whether or not the document
//! could be produced.
//!
//! # Error Handling
//! - Acquisition and listing failures abort and are returned as [`PipelineError`].
//! - Unreadable files are skipped inside the assembler and reported via
//!   [`Document::skipped`].

use tracing::{error, info};

use crate::contract::{Acquirer, PipelineError, RepoSource};
use crate::document::{render_repository, Document};

/// Pipeline stages reported to a progress observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Acquiring,
    Generating,
}

/// Acquires `source`, renders it, and releases the root on every path.
pub async fn generate<A>(acquirer: &A, source: &RepoSource) -> Result<Document, PipelineError>
where
    A: Acquirer + ?Sized,
{
    generate_with_progress(acquirer, source, |_| {}).await
}

/// Same as [`generate`], calling `on_stage` as each stage begins.
pub async fn generate_with_progress<A, F>(
    acquirer: &A,
    source: &RepoSource,
    on_stage: F,
) -> Result<Document, PipelineError>
where
    A: Acquirer + ?Sized,
    F: Fn(Stage),
{
    on_stage(Stage::Acquiring);
    info!(source = %source, "[GEN] Acquiring repository");
    let acquired = match acquirer.acquire(source).await {
        Ok(repo) => repo,
        Err(e) => {
            error!(source = %source, error = %e, "[GEN][ERROR] Acquisition failed");
            return Err(e.into());
        }
    };

    on_stage(Stage::Generating);
    let root = acquired.root().to_path_buf();
    let name = acquired.display_name().to_string();
    info!(root = %root.display(), name = %name, "[GEN] Generating document");

    // Directory walking and file reads are blocking; keep them off the async workers.
    let rendered = tokio::task::spawn_blocking(move || render_repository(&root, &name)).await;

    acquired.release();

    match rendered {
        Ok(Ok(doc)) => {
            info!(
                sections = doc.sections().len(),
                skipped = doc.skipped().len(),
                "[GEN] Document generated"
            );
            Ok(doc)
        }
        Ok(Err(e)) => {
            error!(error = %e, "[GEN][ERROR] Walk failed");
            Err(e.into())
        }
        Err(e) => {
            error!(error = %e, "[GEN][ERROR] Generation task failed");
            Err(PipelineError::Join(e.to_string()))
        }
    }
}
