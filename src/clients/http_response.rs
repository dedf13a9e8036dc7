//! HTTP response types for the commerce API client.
//!
//! This module provides the [`HttpResponse`] type returned by the transport.
//! The response is deliberately raw: status, headers, and JSON body. Mapping
//! error bodies into typed results is the job of the request layer, so that
//! one transport serves single-resource, paged-list, and paged-search shapes
//! alike.

use std::collections::HashMap;

/// A raw HTTP response from the API.
///
/// # Example
///
/// ```rust
/// use commerce_api::clients::HttpResponse;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, HashMap::new(), json!({"id": "c1", "version": 1}));
/// assert!(response.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers; keys are lowercase, values keep arrival order.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body parsed as JSON (an empty object for empty bodies).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code indicates success (200-299).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched case-insensitively (stored lowercase).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the correlation ID assigned by the API, if present.
    ///
    /// Useful for support requests and debugging.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.header("x-correlation-id")
    }

    /// Returns the `Retry-After` delay in seconds, if present and parseable.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.header("retry-after").and_then(|v| v.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_with_header(name: &str, value: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        HttpResponse::new(200, headers, json!({}))
    }

    #[test]
    fn test_is_success_for_2xx() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.is_success());
        let response = HttpResponse::new(201, HashMap::new(), json!({}));
        assert!(response.is_success());
    }

    #[test]
    fn test_is_success_false_for_errors() {
        for status in [400, 404, 409, 500, 503] {
            let response = HttpResponse::new(status, HashMap::new(), json!({}));
            assert!(!response.is_success(), "status {status}");
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = response_with_header("x-correlation-id", "abc-123");
        assert_eq!(response.header("X-Correlation-ID"), Some("abc-123"));
    }

    #[test]
    fn test_correlation_id_extraction() {
        let response = response_with_header("x-correlation-id", "corr-1");
        assert_eq!(response.correlation_id(), Some("corr-1"));

        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.correlation_id(), None);
    }

    #[test]
    fn test_retry_after_parses_seconds() {
        let response = response_with_header("retry-after", "2");
        assert_eq!(response.retry_after(), Some(2.0));

        let response = response_with_header("retry-after", "not-a-number");
        assert_eq!(response.retry_after(), None);
    }
}
