use clap::Parser;
use gittomd::cli::{run, Cli, InvalidRepoIdentifier};
use gittomd::output;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set; otherwise each `-v` raises the level from `warn`.
fn setup_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    setup_logging(cli.verbose);
    tracing::info!("CLI arguments parsed, invoking run");

    match run(cli).await {
        Ok(()) => {
            tracing::info!("CLI completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            if e.is::<InvalidRepoIdentifier>() {
                output::error("Invalid GitHub repository URL or format.");
                output::hint(
                    "Please use a valid URL (e.g., https://github.com/owner/repo) or 'owner/repo'.",
                );
            } else {
                output::error(&format!("{e:#}"));
            }
            ExitCode::FAILURE
        }
    }
}
