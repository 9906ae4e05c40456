//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for the webhook and liveness endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! Both endpoints are documented with OpenAPI annotations using `utoipa`;
//! the rendered docs are served at `/docs` when the server is running.

pub mod handlers;
pub mod models;
