//! Output module for writing harvest results to disk
//!
//! This module handles:
//! - Ensuring the output directory exists before anything is written
//! - Serializing image records to CSV
//! - Summarizing a harvest run

mod csv_writer;
mod directory;
mod report;
mod types;

pub use csv_writer::{create_csv_file, write_csv};
pub use directory::ensure_directory;
pub use report::{print_report, HarvestReport};
pub use types::{CsvHeaderItem, ImageRecord};
