//! Crawler module for page fetching, image extraction and downloading
//!
//! This module contains the harvest pipeline, including:
//! - HTTP fetching of the target page
//! - Anchor scanning behind the sticky prefix gate
//! - Concurrent image downloads joined before reporting
//! - Overall run coordination

mod coordinator;
mod downloader;
mod fetcher;
mod parser;

pub use coordinator::{DownloadOutcome, HarvestPhase, Harvester};
pub use downloader::download_file;
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use parser::{
    eligible_anchors, extract_image_urls, resolve_image_url, Extraction, ImageCandidate,
};

use crate::config::Config;
use crate::output::HarvestReport;
use crate::Result;

/// Runs a complete harvest
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client
/// 2. Fetch the configured page
/// 3. Extract qualifying images behind the prefix gate
/// 4. Download every image concurrently and wait for all of them
/// 5. Write the CSV of successfully downloaded image URLs
///
/// # Arguments
///
/// * `config` - The harvester configuration
///
/// # Returns
///
/// * `Ok(HarvestReport)` - The pipeline ran to completion (individual
///   downloads or the CSV write may still have failed)
/// * `Err(HarvestError)` - The page could not be fetched
pub async fn run_harvest(config: Config) -> Result<HarvestReport> {
    Harvester::new(config)?.run().await
}
