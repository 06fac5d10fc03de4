use crate::config::types::{Config, HttpConfig, OutputConfig};
use crate::output::CsvHeaderItem;
use crate::{ConfigError, ConfigResult};
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_fetch_url(&config.fetch_url)?;

    if config.target_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "target_prefix cannot be empty".to_string(),
        ));
    }

    validate_output_config(&config.output)?;
    validate_csv_header(&config.csv_header)?;
    validate_http_config(&config.http)?;
    Ok(())
}

fn validate_fetch_url(fetch_url: &str) -> ConfigResult<()> {
    let url = Url::parse(fetch_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid fetch_url '{}': {}", fetch_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "fetch_url '{}' must use HTTP or HTTPS scheme",
            fetch_url
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.directory.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.csv_file_name.is_empty() {
        return Err(ConfigError::Validation(
            "csv_file_name cannot be empty".to_string(),
        ));
    }

    // Must name a file inside the output directory
    if config.csv_file_name.contains('/')
        || config.csv_file_name.contains('\\')
        || config.csv_file_name == "."
        || config.csv_file_name == ".."
    {
        return Err(ConfigError::Validation(format!(
            "csv_file_name must be a bare file name, got '{}'",
            config.csv_file_name
        )));
    }

    Ok(())
}

fn validate_csv_header(header: &[CsvHeaderItem]) -> ConfigResult<()> {
    if header.is_empty() {
        return Err(ConfigError::Validation(
            "csv_header must contain at least one column".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for item in header {
        if item.id.is_empty() {
            return Err(ConfigError::Validation(
                "csv_header column id cannot be empty".to_string(),
            ));
        }

        if !seen.insert(item.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "csv_header column id '{}' is duplicated",
                item.id
            )));
        }
    }

    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
