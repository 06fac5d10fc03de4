//! Image file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::output::ensure_directory;
use crate::{HarvestError, Result};

/// Download `url` to `{directory}/{file_name}`, replacing any existing file.
///
/// The directory is ensured on every call. The body is streamed to disk chunk
/// by chunk. A partially written file is removed when the transfer fails.
pub async fn download_file(
    client: &Client,
    url: &str,
    directory: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    ensure_directory(directory)?;

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

    let output_path = directory.join(file_name);
    if let Err(e) = stream_to_file(url, response, &output_path).await {
        let _ = tokio::fs::remove_file(&output_path).await;
        return Err(e);
    }

    Ok(output_path)
}

async fn stream_to_file(
    url: &str,
    response: reqwest::Response,
    output_path: &Path,
) -> Result<()> {
    let save_error = |e: std::io::Error| HarvestError::Download {
        url: url.to_string(),
        message: e.to_string(),
    };

    let mut file = File::create(output_path).await.map_err(save_error)?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| HarvestError::Download {
            url: url.to_string(),
            message: format!("Stream error: {}", e),
        })?;
        file.write_all(&chunk).await.map_err(save_error)?;
    }

    file.flush().await.map_err(save_error)?;

    Ok(())
}
