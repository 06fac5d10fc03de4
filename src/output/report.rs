//! Summary of a single harvest run

use crate::output::types::ImageRecord;
use std::path::PathBuf;

/// Outcome of one harvest run
#[derive(Debug, Clone, Default)]
pub struct HarvestReport {
    /// The page that was scraped
    pub page_url: String,

    /// Number of anchors found on the page
    pub anchors_scanned: usize,

    /// Number of qualifying images a download was started for
    pub queued: usize,

    /// Number of images written to disk
    pub downloaded: usize,

    /// Source URLs whose download failed, with the error message
    pub failed: Vec<(String, String)>,

    /// Records written to the CSV, in discovery order
    pub records: Vec<ImageRecord>,

    /// Path of the CSV file, `None` when writing it failed
    pub csv_path: Option<PathBuf>,
}

impl HarvestReport {
    /// Returns true when every queued download succeeded and the CSV was written
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.csv_path.is_some()
    }
}

/// Prints a run summary to stdout
pub fn print_report(report: &HarvestReport) {
    println!("=== Harvest Summary ===\n");

    println!("Page: {}", report.page_url);
    println!("  Anchors scanned: {}", report.anchors_scanned);
    println!("  Images queued: {}", report.queued);
    println!("  Images downloaded: {}", report.downloaded);
    println!();

    if !report.failed.is_empty() {
        println!("Failed Downloads ({}):", report.failed.len());
        for (url, error) in &report.failed {
            println!("  - {}: {}", url, error);
        }
        println!();
    }

    match &report.csv_path {
        Some(path) => println!(
            "CSV: {} ({} rows)",
            path.display(),
            report.records.len()
        ),
        None => println!("CSV: not written"),
    }
}
