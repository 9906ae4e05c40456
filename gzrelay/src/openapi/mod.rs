//! OpenAPI/Swagger documentation configuration.

use utoipa::OpenApi;

use crate::api::models::probes::HealthResponse;
use crate::api::models::relay::{RelayRequest, RelayResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "gzrelay",
        description = "Webhook relay: downloads a source file, gzips it, republishes the \
                       compressed artifact to an anonymous file host, and writes the public \
                       link into a tabular record store."
    ),
    paths(crate::api::handlers::relay::relay_webhook, crate::api::handlers::probes::health),
    components(schemas(RelayRequest, RelayResponse, HealthResponse)),
    tags(
        (name = "relay", description = "Webhook relay pipeline"),
        (name = "probes", description = "Liveness checks")
    )
)]
pub struct ApiDoc;
