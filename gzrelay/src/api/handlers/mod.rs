//! HTTP request handlers.
//!
//! - [`relay`]: the webhook endpoint driving the fetch → gzip → upload →
//!   record-update pipeline
//! - [`probes`]: liveness check
//!
//! Handlers return [`crate::errors::Error`] which converts to the uniform
//! JSON error envelope with the appropriate HTTP status code.

pub mod probes;
pub mod relay;
