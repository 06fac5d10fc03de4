//! HTTP fetcher implementation
//!
//! This module handles the page request of a harvest run:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests for the target page
//! - Error classification (transport failure vs. non-success status)

use crate::config::HttpConfig;
use crate::{HarvestError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the body was served from, after redirects
    pub final_url: Url,

    /// Page body
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(HarvestError)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use image_harvester::config::HttpConfig;
/// use image_harvester::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches the HTML document at `url`
///
/// Redirects are followed by the client, and the returned page carries the
/// URL the body was finally served from. A single request is made; there is
/// no retry.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - The final URL and response body
/// * `Err(HarvestError::Http)` - The request failed in transport
/// * `Err(HarvestError::HttpStatus)` - The server answered with a non-2xx status
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().clone();
    let body = response.text().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchedPage { final_url, body })
}
