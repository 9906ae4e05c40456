use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// One or more required request fields or configuration values are absent
    #[error("Missing required parameters or configuration values")]
    Validation {
        missing_items: Vec<String>,
        debug_values: serde_json::Value,
    },

    /// Request body failed to parse as the expected JSON shape
    #[error("Invalid request body: {detail}")]
    MalformedBody { detail: String },

    /// Origin download failed or returned a non-success status
    #[error("Failed to fetch source file: {detail}")]
    UpstreamFetch { detail: String },

    /// File host rejected the upload or returned a response without a link
    #[error("Failed to upload compressed file to the file host")]
    Upload { raw_response: String },

    /// Record store rejected the PATCH
    #[error("Record store rejected the update{}", status.map(|s| format!(": HTTP {s}")).unwrap_or_default())]
    RecordUpdate { status: Option<u16>, body: String },

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } | Error::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Error::UpstreamFetch { .. } | Error::Upload { .. } | Error::RecordUpdate { .. } | Error::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Validation { missing_items, .. } => {
                tracing::debug!(?missing_items, "Rejecting request with missing items");
            }
            Error::MalformedBody { detail } => {
                tracing::debug!(detail, "Rejecting unparseable request body");
            }
            Error::Other(_) => {
                tracing::error!("Internal relay error: {:#}", self);
            }
            _ => {
                tracing::warn!("Relay pipeline failed: {}", self);
            }
        }

        let status = self.status_code();

        // Every failure gets a JSON envelope with a single error string; validation
        // failures and store rejections carry extra diagnostic fields.
        let body = match self {
            Error::Validation {
                missing_items,
                debug_values,
            } => json!({
                "error": "Missing required parameters or configuration values",
                "missing_items": missing_items,
                "debug_values": debug_values,
            }),
            Error::MalformedBody { detail } => json!({
                "error": format!("Invalid request body: {detail}"),
            }),
            Error::UpstreamFetch { detail } => json!({
                "error": format!("Failed to fetch source file: {detail}"),
            }),
            Error::Upload { raw_response } => json!({
                "error": "Failed to upload compressed file to the file host",
                "details": raw_response,
            }),
            Error::RecordUpdate { status: store_status, body } => json!({
                "error": match store_status {
                    Some(s) => format!("Record store rejected the update: HTTP {s}"),
                    None => "Record store rejected the update".to_string(),
                },
                "store_status": store_status,
                "store_body": body,
            }),
            Error::Other(e) => json!({
                "error": format!("{e:#}"),
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for relay operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = Error::Validation {
            missing_items: vec!["file_url".to_string()],
            debug_values: json!({}),
        };
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let malformed = Error::MalformedBody {
            detail: "unknown field `api_url`".to_string(),
        };
        assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);

        let fetch = Error::UpstreamFetch {
            detail: "404 Not Found".to_string(),
        };
        assert_eq!(fetch.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let upload = Error::Upload {
            raw_response: "{}".to_string(),
        };
        assert_eq!(upload.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let store = Error::RecordUpdate {
            status: Some(422),
            body: String::new(),
        };
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_record_update_message_includes_store_status() {
        let err = Error::RecordUpdate {
            status: Some(422),
            body: "bad field".to_string(),
        };
        assert!(err.to_string().contains("422"));

        let transport = Error::RecordUpdate {
            status: None,
            body: "connection refused".to_string(),
        };
        assert!(!transport.to_string().contains("HTTP"));
    }
}
