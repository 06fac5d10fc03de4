//! Harvest coordinator - main pipeline orchestration logic
//!
//! This module sequences one harvest run:
//! - Fetching the configured page
//! - Extracting qualifying images behind the prefix gate
//! - Downloading every image concurrently and joining on all of them
//! - Writing the CSV of successfully downloaded image URLs
//!
//! A fetch failure ends the run before anything is written to disk. Download
//! and CSV failures are logged and reported but do not abort the run.

use crate::config::Config;
use crate::crawler::downloader::download_file;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::{extract_image_urls, resolve_image_url, ImageCandidate};
use crate::output::{create_csv_file, HarvestReport, ImageRecord};
use crate::{HarvestError, Result};
use futures::future::join_all;
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Pipeline phase of a harvest run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestPhase {
    Idle,
    Fetching,
    Extracting,
    Downloading,
    WritingCsv,
    Done,
    Error,
}

impl fmt::Display for HarvestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HarvestPhase::Idle => "idle",
            HarvestPhase::Fetching => "fetching",
            HarvestPhase::Extracting => "extracting",
            HarvestPhase::Downloading => "downloading",
            HarvestPhase::WritingCsv => "writing-csv",
            HarvestPhase::Done => "done",
            HarvestPhase::Error => "error",
        };
        f.write_str(name)
    }
}

/// Result of a single image download
#[derive(Debug)]
pub struct DownloadOutcome {
    pub candidate: ImageCandidate,
    pub result: Result<PathBuf>,
}

/// Main harvest coordinator structure
pub struct Harvester {
    config: Config,
    client: Client,
    phase: HarvestPhase,
}

impl Harvester {
    /// Creates a new harvester instance
    ///
    /// # Arguments
    ///
    /// * `config` - The harvester configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Successfully created harvester
    /// * `Err(HarvestError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.http)?;

        Ok(Self {
            config,
            client,
            phase: HarvestPhase::Idle,
        })
    }

    /// Returns the phase the last run reached
    pub fn phase(&self) -> HarvestPhase {
        self.phase
    }

    fn enter(&mut self, phase: HarvestPhase) {
        tracing::debug!("Harvest phase: {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    /// Runs the full pipeline once
    ///
    /// # Returns
    ///
    /// * `Ok(HarvestReport)` - The pipeline reached `Done`
    /// * `Err(HarvestError)` - The page URL was invalid or could not be fetched
    pub async fn run(&mut self) -> Result<HarvestReport> {
        match self.run_pipeline().await {
            Ok(report) => {
                self.enter(HarvestPhase::Done);
                Ok(report)
            }
            Err(e) => {
                self.enter(HarvestPhase::Error);
                Err(e)
            }
        }
    }

    async fn run_pipeline(&mut self) -> Result<HarvestReport> {
        let page_url = Url::parse(&self.config.fetch_url)?;

        self.enter(HarvestPhase::Fetching);
        tracing::info!("Fetching {}", page_url);
        let page = fetch_page(&self.client, page_url.as_str()).await?;
        if page.final_url != page_url {
            tracing::info!("Redirected to {}", page.final_url);
        }

        self.enter(HarvestPhase::Extracting);
        let extraction = extract_image_urls(&page.body, &self.config.target_prefix);
        tracing::info!(
            "Scanned {} anchors, {} qualifying images",
            extraction.anchors_scanned,
            extraction.candidates.len()
        );

        self.enter(HarvestPhase::Downloading);
        // Relative sources resolve against the page actually served
        let outcomes = self
            .download_all(&page.final_url, extraction.candidates)
            .await;

        let mut report = HarvestReport {
            page_url: page.final_url.to_string(),
            anchors_scanned: extraction.anchors_scanned,
            queued: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome.result {
                Ok(path) => {
                    tracing::info!("File downloaded successfully: {}", path.display());
                    report.downloaded += 1;
                    report.records.push(outcome.candidate.to_record());
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    report.failed.push((outcome.candidate.src, e.to_string()));
                }
            }
        }

        self.enter(HarvestPhase::WritingCsv);
        report.csv_path = self.write_records(&report.records);

        Ok(report)
    }

    /// Starts every download at once and waits for all of them
    ///
    /// Outcomes are returned in the order of `candidates`.
    async fn download_all(
        &self,
        page_url: &Url,
        candidates: Vec<ImageCandidate>,
    ) -> Vec<DownloadOutcome> {
        let directory = self.config.output.directory.as_path();

        let downloads = candidates.into_iter().map(move |candidate| async move {
            let file_name = candidate.file_name();
            let result = match resolve_image_url(&candidate.src, page_url) {
                Some(url) => download_file(&self.client, url.as_str(), directory, &file_name).await,
                None => Err(HarvestError::Download {
                    url: candidate.src.clone(),
                    message: "unsupported or malformed image URL".to_string(),
                }),
            };

            DownloadOutcome { candidate, result }
        });

        join_all(downloads).await
    }

    /// Writes the CSV, logging instead of propagating failures
    fn write_records(&self, records: &[ImageRecord]) -> Option<PathBuf> {
        match create_csv_file(
            &self.config.output.directory,
            &self.config.output.csv_file_name,
            &self.config.csv_header,
            records,
        ) {
            Ok(path) => {
                tracing::info!("CSV file created with image URLs: {}", path.display());
                Some(path)
            }
            Err(e) => {
                tracing::error!("Error writing CSV file: {}", e);
                None
            }
        }
    }
}
