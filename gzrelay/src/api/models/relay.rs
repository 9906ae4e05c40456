//! Wire models for the webhook and liveness endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound webhook notification.
///
/// Both fields are required for the pipeline to run, but are optional here so
/// that validation can report *all* missing items in one response instead of
/// failing at deserialization. Unknown fields are rejected outright.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RelayRequest {
    /// URL of the source file to download and compress
    pub file_url: Option<String>,
    /// Identifier of the record that receives the compressed file link
    pub record_id: Option<String>,
}

/// Response for a fully successful pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelayResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Public link to the compressed artifact, exactly as the file host returned it
    pub gzipped_url: String,
    pub record_id: String,
}
