//! HTTP handler for the webhook relay endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    api::models::relay::{RelayRequest, RelayResponse},
    errors::{Error, Result},
    relay,
};

#[utoipa::path(
    post,
    path = "/webhook",
    tag = "relay",
    summary = "Relay a file through the gzip pipeline",
    description = "Downloads the file at `file_url`, gzips it, uploads the compressed \
                   artifact to the anonymous file host, and writes the public link into \
                   the record identified by `record_id`.",
    request_body = RelayRequest,
    responses(
        (status = 200, description = "Pipeline completed; status is forwarded from the record store", body = RelayResponse),
        (status = 400, description = "Missing required request fields or configuration values"),
        (status = 500, description = "A pipeline stage failed; the envelope names the stage"),
    )
)]
#[tracing::instrument(skip_all, fields(record_id = tracing::field::Empty))]
pub async fn relay_webhook(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RelayRequest>, JsonRejection>,
) -> Result<Response> {
    // A body that fails to parse still gets the JSON error envelope, not
    // axum's plain-text rejection
    let Json(payload) = payload.map_err(|rejection| Error::MalformedBody {
        detail: rejection.body_text(),
    })?;
    tracing::Span::current().record("record_id", tracing::field::debug(&payload.record_id));

    let outcome = relay::run(&state, payload).await?;

    // The record store's own status code is forwarded, not a fixed 200
    let status = StatusCode::from_u16(outcome.store_status).unwrap_or(StatusCode::OK);
    Ok((
        status,
        Json(RelayResponse {
            message: "Gzipped file uploaded and record updated successfully".to_string(),
            gzipped_url: outcome.public_url,
            record_id: outcome.record_id,
        }),
    )
        .into_response())
}
