//! CLI for portfolio-sync.
//!
//! Generates markdown project cards from a GitHub account's public
//! repositories, either for every eligible repository or for one named one.

use clap::Parser;
use portfolio_sync::{
    load_site_config, ProcessingResult, RunSummary, Runner, RunnerConfig, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// portfolio-sync - Generate portfolio project cards from GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository to process; omit to sync every eligible repository.
    #[arg(env = "REPO_NAME")]
    repository: Option<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Path to the site configuration file.
    #[arg(long, default_value = "portfolio.toml")]
    config: PathBuf,

    /// GitHub account to scan (overrides the config file).
    #[arg(long, env = "PORTFOLIO_OWNER")]
    owner: Option<String>,

    /// Directory receiving the project cards (overrides the config file).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Pause between repositories in milliseconds (overrides the config file).
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Preview project cards without writing them.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Several rustls providers may be compiled in; pick one explicitly
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let site = load_site_config(&args.config)?;

    let mut config = RunnerConfig::new(args.token, site)
        .with_repository(args.repository)
        .with_dry_run(args.dry_run);
    if let Some(owner) = args.owner {
        config = config.with_owner(owner);
    }
    if let Some(output_dir) = args.output_dir {
        config = config.with_output_dir(output_dir);
    }
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_delay(Duration::from_millis(delay_ms));
    }

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Repositories considered: {}",
        summary.repositories_considered
    );

    if summary.dry_run {
        println!("  Projects previewed: {}", summary.previewed);
    } else {
        println!("  Projects created: {}", summary.created);
    }
    println!("  Repositories skipped: {}", summary.skipped);
    println!("  Repositories failed: {}", summary.failed);

    for result in &summary.results {
        if let ProcessingResult::Failed { repository, error } = result {
            println!("    {repository}: {error}");
        }
    }
}
