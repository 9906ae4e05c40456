//! The relay pipeline: validate → fetch → compress → upload → record update.
//!
//! Each request runs the stages strictly in order; any stage failure aborts the
//! pipeline and no later stage is attempted. All values are request-local — the
//! pipeline holds no state across requests.

pub mod compress;
pub mod fetch;
pub mod store;
pub mod upload;

use serde_json::json;

use crate::{
    AppState,
    api::models::relay::RelayRequest,
    config::Config,
    errors::{Error, Result},
};
use store::StoreTarget;

/// Result of a fully successful pipeline run.
#[derive(Debug)]
pub struct RelayOutcome {
    /// Public link to the compressed artifact, exactly as returned by the file host
    pub public_url: String,
    pub record_id: String,
    /// Status code the record store answered the PATCH with, forwarded to the caller
    pub store_status: u16,
}

/// Validated inputs for one pipeline run.
#[derive(Debug)]
struct ValidatedRequest {
    file_url: String,
    record_id: String,
    target: StoreTarget,
}

/// Collect *all* missing required items — request body fields and configuration
/// values alike — into one diagnostic, rather than failing on the first.
/// Secret configuration values are reported only as a `*_present` boolean.
fn validate(config: &Config, request: &RelayRequest) -> Result<ValidatedRequest> {
    let mut missing = Vec::new();

    if request.file_url.as_deref().is_none_or(str::is_empty) {
        missing.push("file_url".to_string());
    }
    if request.record_id.as_deref().is_none_or(str::is_empty) {
        missing.push("record_id".to_string());
    }
    if config.store.api_key.is_none() {
        missing.push("store.api_key".to_string());
    }
    if config.store.base_id.is_none() {
        missing.push("store.base_id".to_string());
    }
    if config.store.table_name.is_none() {
        missing.push("store.table_name".to_string());
    }

    if !missing.is_empty() {
        return Err(Error::Validation {
            missing_items: missing,
            debug_values: json!({
                "file_url": request.file_url,
                "record_id": request.record_id,
                "store_api_key_present": config.store.api_key.is_some(),
                "store_base_id_present": config.store.base_id.is_some(),
                "store_table_name_present": config.store.table_name.is_some(),
            }),
        });
    }

    // The is_some checks above make these infallible
    Ok(ValidatedRequest {
        file_url: request.file_url.clone().unwrap_or_default(),
        record_id: request.record_id.clone().unwrap_or_default(),
        target: StoreTarget {
            api_url: config.store.api_url.clone(),
            api_key: config.store.api_key.clone().unwrap_or_default(),
            base_id: config.store.base_id.clone().unwrap_or_default(),
            table_name: config.store.table_name.clone().unwrap_or_default(),
            attachment_field: config.store.attachment_field.clone(),
        },
    })
}

/// Run the full pipeline for one webhook notification.
pub async fn run(state: &AppState, request: RelayRequest) -> Result<RelayOutcome> {
    let validated = validate(&state.config, &request)?;

    let payload = fetch::download(&state.http, &validated.file_url).await?;
    tracing::debug!(bytes = payload.len(), "Fetched source file");

    let gzipped = compress::gzip(&payload)?;
    tracing::debug!(bytes = gzipped.len(), "Compressed payload");

    let filename = upload::gz_filename(&validated.file_url);
    let public_url = upload::publish(&state.http, &state.config.upload, &filename, gzipped).await?;

    let store_status = store::attach_link(&state.http, &validated.target, &validated.record_id, &public_url).await?;

    tracing::info!(
        record_id = %validated.record_id,
        public_url = %public_url,
        store_status,
        "Relay pipeline completed"
    );

    Ok(RelayOutcome {
        public_url,
        record_id: validated.record_id,
        store_status,
    })
}
