//! Source file download.

use bytes::Bytes;

use crate::errors::{Error, Result};

/// Download the source file, treating any non-success status as fatal.
///
/// The payload is held entirely in memory; the webhook contract assumes files
/// small enough for a one-pass gzip (no streaming).
pub async fn download(client: &reqwest::Client, file_url: &str) -> Result<Bytes> {
    tracing::debug!(url = %file_url, "Downloading source file");

    let response = client
        .get(file_url)
        .send()
        .await
        .map_err(|e| Error::UpstreamFetch { detail: e.to_string() })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, url = %file_url, "Source fetch returned non-success status");
        return Err(Error::UpstreamFetch {
            detail: format!("{status} - {body}"),
        });
    }

    response
        .bytes()
        .await
        .map_err(|e| Error::UpstreamFetch { detail: e.to_string() })
}
