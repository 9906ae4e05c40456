//! Request/response data structures for the API.

pub mod probes;
pub mod relay;
