//! Image Harvester main entry point
//!
//! This is the command-line interface for the image harvester.

use clap::Parser;
use image_harvester::config::{load_config, validate, Config};
use image_harvester::crawler::run_harvest;
use image_harvester::output::print_report;
use image_harvester::ConfigResult;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Image Harvester: anchor-gated image scraping
///
/// Fetches one page, downloads the images nested in every anchor at or after
/// the first anchor whose href contains the target prefix, and records their
/// URLs in a CSV file.
#[derive(Parser, Debug)]
#[command(name = "image-harvester")]
#[command(version)]
#[command(about = "Download gated anchor images from a page", long_about = None)]
struct Cli {
    /// Optional TOML configuration file (built-in defaults otherwise)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Page to scrape
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Href substring that opens the anchor gate
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Directory receiving images and the CSV file
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// CSV file name inside the output directory
    #[arg(long, value_name = "NAME")]
    csv_name: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Failures are logged here once and only turned into the exit status
    let config = match build_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match handle_harvest(config, cli.quiet).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("image_harvester=info,warn"),
            1 => EnvFilter::new("image_harvester=debug,info"),
            2 => EnvFilter::new("image_harvester=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any), then applies command-line overrides
fn build_config(cli: &Cli) -> ConfigResult<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(url) = &cli.url {
        config.fetch_url = url.clone();
    }
    if let Some(prefix) = &cli.prefix {
        config.target_prefix = prefix.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    if let Some(name) = &cli.csv_name {
        config.output.csv_file_name = name.clone();
    }

    validate(&config)?;
    Ok(config)
}

/// Handles the harvest run
///
/// Download and CSV failures are reported but still count as success; only a
/// failed page fetch is returned as an error.
async fn handle_harvest(config: Config, quiet: bool) -> image_harvester::Result<()> {
    tracing::info!(
        "Target prefix: {}, output: {}",
        config.target_prefix,
        config.output.directory.display()
    );

    let report = run_harvest(config).await?;

    if !report.failed.is_empty() {
        tracing::warn!("{} of {} downloads failed", report.failed.len(), report.queued);
    }
    if !quiet {
        print_report(&report);
    }

    Ok(())
}
