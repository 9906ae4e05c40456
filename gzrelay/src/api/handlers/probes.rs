//! Liveness probe handler.

use axum::Json;

use crate::api::models::probes::HealthResponse;

#[utoipa::path(
    get,
    path = "/health",
    tag = "probes",
    summary = "Liveness check",
    description = "Confirms the relay is running. Performs no external calls.",
    responses(
        (status = 200, description = "Service is live", body = HealthResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "gzip webhook relay is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{create_test_app, test_config};
    use axum::http::StatusCode;
    use serde_json::Value;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = create_test_app(test_config());

        let response = app.get("/health").await;

        response.assert_status(StatusCode::OK);
        let json: Value = response.json();
        assert_eq!(json["status"], "ok");
        assert!(json["message"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_health_independent_of_configuration() {
        // Liveness must not depend on store credentials being present
        let app = create_test_app(crate::Config::default());

        let response = app.get("/health").await;

        response.assert_status(StatusCode::OK);
        let json: Value = response.json();
        assert_eq!(json["status"], "ok");
    }
}
