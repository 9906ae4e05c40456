//! Wire models for the liveness endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness probe response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
