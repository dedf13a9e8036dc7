//! HTTP transport for the commerce API.
//!
//! This module is the sole place network I/O happens. It provides:
//!
//! - [`ApiClient`]: the project-scoped HTTP client with retry handling
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: typed request construction
//! - [`HttpResponse`]: the raw status/headers/body exchange result
//! - [`HttpError`] and friends: transport-level error types
//!
//! Request builders in [`crate::request`] produce [`HttpRequest`] values and
//! map the raw [`HttpResponse`] into typed models; the transport itself never
//! interprets API error bodies.

mod api_client;
mod errors;
mod http_request;
mod http_response;

pub use api_client::{ApiClient, CLIENT_VERSION, RETRY_WAIT_TIME};
pub use errors::{HttpError, InvalidHttpRequestError, MaxRetriesExceededError};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
