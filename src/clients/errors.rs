//! HTTP-specific error types for the commerce API client.
//!
//! This module contains error types for HTTP transport operations: request
//! validation failures, network errors, and retry exhaustion. API-level
//! errors (4xx/5xx bodies parsed into a typed error list) live in
//! [`crate::response::ApiError`]; the transport hands those responses back
//! unchanged and only fails for problems below the API layer.

use thiserror::Error;

/// Error returned when retry attempts for a request have been exhausted.
///
/// The transport retries 429 and 500 responses when a request is built with
/// `tries > 1`. Once the configured number of attempts is used up, this
/// error reports the last status code seen.
///
/// # Example
///
/// ```rust
/// use commerce_api::clients::MaxRetriesExceededError;
///
/// let error = MaxRetriesExceededError {
///     status: 429,
///     tries: 3,
///     correlation_id: None,
/// };
///
/// println!("{}", error); // "Exceeded maximum retry count of 3. Last status: 429"
/// ```
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last status: {status}")]
pub struct MaxRetriesExceededError {
    /// The HTTP status code of the last response.
    pub status: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Correlation ID of the last response, for error reporting.
    pub correlation_id: Option<String>,
}

/// Error returned when an HTTP request fails validation before sending.
///
/// # Example
///
/// ```rust
/// use commerce_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// println!("{}", error); // "Cannot use post without specifying a body."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was built without a body.
    #[error("Cannot use {method} without specifying a body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A body was provided for a method that must not carry one.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Unified error type for HTTP transport failures.
///
/// Note that a non-2xx response is *not* a transport failure: the client
/// returns the raw response so the request layer can map the error body
/// into a typed result. Use pattern matching to handle specific failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed before the request was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxRetriesExceededError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
