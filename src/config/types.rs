use crate::config::defaults;
use crate::output::CsvHeaderItem;
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Image Harvester
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page to scrape
    #[serde(rename = "fetch-url")]
    pub fetch_url: String,

    /// Href substring that opens the anchor gate
    #[serde(rename = "target-prefix")]
    pub target_prefix: String,

    pub output: OutputConfig,

    /// Ordered CSV columns
    #[serde(rename = "csv-header")]
    pub csv_header: Vec<CsvHeaderItem>,

    pub http: HttpConfig,
}

/// Output location configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives images and the CSV file
    pub directory: PathBuf,

    /// File name of the CSV, relative to `directory`
    #[serde(rename = "csv-file-name")]
    pub csv_file_name: String,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_url: defaults::FETCH_URL.to_string(),
            target_prefix: defaults::TARGET_PREFIX.to_string(),
            output: OutputConfig::default(),
            csv_header: defaults::default_csv_header(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(defaults::DIRECTORY_NAME),
            csv_file_name: defaults::DEFAULT_CSV_FILENAME.to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::USER_AGENT.to_string(),
            timeout_secs: defaults::TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
        }
    }
}
