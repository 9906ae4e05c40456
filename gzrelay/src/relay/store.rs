//! Tabular record store update.
//!
//! The store is addressed as `{api_url}/{base_id}/{table_name}/{record_id}`
//! with bearer auth. The update sets one attachment-typed field to a
//! one-element list containing the public link. The store's own status code
//! is forwarded to the caller on success; on rejection its raw status and
//! body travel inside the error envelope.

use serde_json::json;
use url::Url;

use crate::errors::{Error, Result};

/// Fully resolved store coordinates for one pipeline run.
#[derive(Debug, Clone)]
pub struct StoreTarget {
    pub api_url: Url,
    pub api_key: String,
    pub base_id: String,
    pub table_name: String,
    pub attachment_field: String,
}

impl StoreTarget {
    /// Record-by-id endpoint for the PATCH
    fn record_url(&self, record_id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            self.base_id,
            self.table_name,
            record_id
        )
    }
}

/// PATCH the record's attachment field with the public link.
/// Returns the store's status code so the handler can forward it verbatim.
pub async fn attach_link(client: &reqwest::Client, target: &StoreTarget, record_id: &str, public_url: &str) -> Result<u16> {
    let url = target.record_url(record_id);
    tracing::debug!(%url, record_id, "Updating record with compressed file link");

    let payload = json!({
        "fields": {
            (target.attachment_field.as_str()): [{ "url": public_url }]
        }
    });

    let response = client
        .patch(&url)
        .bearer_auth(&target.api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| Error::RecordUpdate {
            status: None,
            body: e.to_string(),
        })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        tracing::warn!(%status, record_id, "Record store rejected the update");
        return Err(Error::RecordUpdate {
            status: Some(status.as_u16()),
            body,
        });
    }

    Ok(status.as_u16())
}
