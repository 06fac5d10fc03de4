//! Built-in defaults used when no configuration file overrides them

use crate::output::CsvHeaderItem;

/// Page that is scraped for images
pub const FETCH_URL: &str = "https://www.npmjs.com/package/cheerio";

/// An anchor whose href contains this prefix opens the selection gate
pub const TARGET_PREFIX: &str = "https://www.airbnb.com/";

/// Directory receiving downloaded images and the CSV file
pub const DIRECTORY_NAME: &str = "./files";

/// Name of the CSV file written inside [`DIRECTORY_NAME`]
pub const DEFAULT_CSV_FILENAME: &str = "image_urls.csv";

pub const USER_AGENT: &str = concat!("image-harvester/", env!("CARGO_PKG_VERSION"));

pub const TIMEOUT_SECS: u64 = 30;

pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// The single `url` column labelled "Image URL"
pub fn default_csv_header() -> Vec<CsvHeaderItem> {
    vec![CsvHeaderItem::new("url", "Image URL")]
}
