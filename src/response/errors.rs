//! API-level error types.
//!
//! The platform reports request failures as a JSON error body:
//!
//! ```json
//! {
//!   "statusCode": 409,
//!   "message": "Object 72f44b6... has a different version than expected.",
//!   "errors": [
//!     {"code": "ConcurrentModification", "message": "...", "currentVersion": 5}
//!   ]
//! }
//! ```
//!
//! Expected API failures are values, not panics: every request's
//! `map_response` returns `Result<T, ApiError>`. The 409 version-conflict
//! case is the one callers are expected to special-case (re-fetch, reapply,
//! resubmit), so [`ApiError::is_concurrent_modification`] exists for it.

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};

/// One entry in the `errors` list of an API error body.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. `ConcurrentModification`,
    /// `InvalidField`, `DuplicateField`).
    pub code: String,
    /// Human-readable description of this error.
    #[serde(default)]
    pub message: String,
    /// The field the error refers to, when applicable.
    #[serde(default)]
    pub field: Option<String>,
}

/// The parsed JSON error body of a failed API request.
///
/// Unknown fields are ignored for forward compatibility; a body that is not
/// in the documented error shape produces an `ErrorResponse` with an empty
/// error list and a fallback message.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// The HTTP status code repeated in the body.
    #[serde(default)]
    pub status_code: u16,
    /// Top-level human-readable message.
    #[serde(default)]
    pub message: String,
    /// Individual error entries.
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// Error code the platform uses for optimistic-concurrency conflicts.
pub const CONCURRENT_MODIFICATION: &str = "ConcurrentModification";

/// Error type for API request execution and response mapping.
///
/// # Example
///
/// ```rust,ignore
/// match request.execute(&client).await {
///     Ok(customer) => println!("updated to version {}", customer.version),
///     Err(e) if e.is_concurrent_modification() => {
///         // re-fetch, reapply actions, resubmit
///     }
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API rejected the request (4xx) or failed serving it (5xx).
    #[error("API request failed with status {status}: {}", error_response.message)]
    ErrorResponse {
        /// The HTTP status code of the response.
        status: u16,
        /// The parsed error body.
        error_response: ErrorResponse,
        /// Correlation ID of the response, for error reporting.
        correlation_id: Option<String>,
    },

    /// A transport failure occurred before an API response was received.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A response body could not be deserialized into the expected model.
    #[error("Failed to deserialize response body: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds an `ApiError` from a non-2xx response.
    ///
    /// The body is parsed as the documented error shape; bodies that do not
    /// match still produce a typed error carrying the status code.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        let error_response = serde_json::from_value::<ErrorResponse>(response.body.clone())
            .unwrap_or_else(|_| ErrorResponse {
                status_code: response.status,
                message: response.body.to_string(),
                errors: Vec::new(),
            });

        Self::ErrorResponse {
            status: response.status,
            error_response,
            correlation_id: response.correlation_id().map(String::from),
        }
    }

    /// Returns the HTTP status of the failed request, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ErrorResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the parsed error body, if one was received.
    #[must_use]
    pub const fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::ErrorResponse { error_response, .. } => Some(error_response),
            _ => None,
        }
    }

    /// Returns `true` if this error is an optimistic-concurrency conflict
    /// (HTTP 409), the case callers resolve by re-fetching and resubmitting.
    #[must_use]
    pub fn is_concurrent_modification(&self) -> bool {
        match self {
            Self::ErrorResponse {
                status,
                error_response,
                ..
            } => {
                *status == 409
                    || error_response
                        .errors
                        .iter()
                        .any(|e| e.code == CONCURRENT_MODIFICATION)
            }
            _ => false,
        }
    }

    /// Returns the correlation ID of the failed response, if available.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        match self {
            Self::ErrorResponse { correlation_id, .. } => correlation_id.as_deref(),
            _ => None,
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn error_http_response(status: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(status, HashMap::new(), body)
    }

    #[test]
    fn test_error_response_parses_documented_shape() {
        let body = json!({
            "statusCode": 400,
            "message": "Invalid email",
            "errors": [
                {"code": "InvalidField", "message": "Invalid email", "field": "email"}
            ]
        });

        let parsed: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.status_code, 400);
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].code, "InvalidField");
        assert_eq!(parsed.errors[0].field.as_deref(), Some("email"));
    }

    #[test]
    fn test_error_response_ignores_unknown_fields() {
        let body = json!({
            "statusCode": 400,
            "message": "m",
            "errors": [],
            "somethingNew": {"nested": true}
        });

        let parsed: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.status_code, 400);
    }

    #[test]
    fn test_from_response_maps_409_to_concurrent_modification() {
        let response = error_http_response(
            409,
            json!({
                "statusCode": 409,
                "message": "Version mismatch",
                "errors": [{"code": "ConcurrentModification", "message": "Version mismatch"}]
            }),
        );

        let error = ApiError::from_response(&response);
        assert_eq!(error.status(), Some(409));
        assert!(error.is_concurrent_modification());
        assert_eq!(error.error_response().unwrap().errors.len(), 1);
    }

    #[test]
    fn test_non_conflict_errors_are_not_concurrent_modification() {
        let response = error_http_response(
            404,
            json!({"statusCode": 404, "message": "Not found", "errors": []}),
        );

        let error = ApiError::from_response(&response);
        assert_eq!(error.status(), Some(404));
        assert!(!error.is_concurrent_modification());
    }

    #[test]
    fn test_from_response_with_unparseable_body_keeps_status() {
        let response = error_http_response(502, json!({"raw_body": "<html>bad gateway</html>"}));

        let error = ApiError::from_response(&response);
        assert_eq!(error.status(), Some(502));
        // Fallback message carries the raw body for debugging
        let inner = error.error_response().unwrap();
        assert!(inner.message.contains("bad gateway"));
    }

    #[test]
    fn test_correlation_id_is_preserved() {
        let mut headers = HashMap::new();
        headers.insert(
            "x-correlation-id".to_string(),
            vec!["corr-42".to_string()],
        );
        let response = HttpResponse::new(
            400,
            headers,
            json!({"statusCode": 400, "message": "bad", "errors": []}),
        );

        let error = ApiError::from_response(&response);
        assert_eq!(error.correlation_id(), Some("corr-42"));
    }

    #[test]
    fn test_display_includes_status_and_message() {
        let response = error_http_response(
            409,
            json!({"statusCode": 409, "message": "Version mismatch", "errors": []}),
        );
        let error = ApiError::from_response(&response);
        let message = error.to_string();
        assert!(message.contains("409"));
        assert!(message.contains("Version mismatch"));
    }
}
