//! HTTP client for commerce API communication.
//!
//! This module provides the [`ApiClient`] type: the single place where
//! network I/O, authentication headers, and transport-level retries live.
//! Request builders hand it an [`HttpRequest`] and map the returned raw
//! [`HttpResponse`] themselves.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, MaxRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ApiConfig;

/// Fixed retry wait time in seconds when no `Retry-After` header is present.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests against one project.
///
/// The client handles:
/// - Base URL construction (`{api_url}/{project_key}`)
/// - Default headers including User-Agent and bearer access token
/// - Automatic retry for 429 and 500 responses when a request opts in
/// - Ordered query-string assembly (repeated keys preserved)
///
/// A non-2xx response is returned as an `Ok(HttpResponse)` so the request
/// layer can turn the error body into a typed result; only validation,
/// network, and retry-exhaustion failures are `Err`.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use commerce_api::{ApiClient, ApiConfig, ProjectKey, AuthToken, ApiUrl};
/// use commerce_api::clients::{HttpRequest, HttpMethod};
///
/// let config = ApiConfig::builder()
///     .project_key(ProjectKey::new("my-project")?)
///     .auth_token(AuthToken::new("token")?)
///     .api_url(ApiUrl::new("https://api.example.com")?)
///     .build()?;
///
/// let client = ApiClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "customers")
///     .query_param("limit", "20", true)
///     .build()?;
///
/// let response = client.execute(request).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Project-scoped base URL (e.g. `https://api.example.com/my-project`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new client for the project described by `config`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let base_url = format!("{}/{}", config.api_url(), config.project_key());

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Commerce API Client v{CLIENT_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.auth_token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
        }
    }

    /// Returns the project-scoped base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction including the ordered query string
    /// - Header merging
    /// - Response body parsing
    /// - Retry logic for 429 and 500 responses when `request.tries > 1`
    ///
    /// Any completed HTTP exchange is returned as `Ok`, including 4xx/5xx
    /// responses; mapping those to typed errors belongs to the request layer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - Retries are exhausted on a retryable status (`MaxRetries`)
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_url, request.path_with_query());

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            let res = req_builder.send().await?;

            let status = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text)
                    .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
            };

            let response = HttpResponse::new(status, res_headers, body);

            // Only rate limiting and transient server failures are retried;
            // everything else (including other 5xx) goes back to the caller.
            let retryable = status == 429 || status == 500;
            if !retryable || request.tries <= 1 {
                return Ok(response);
            }

            if tries >= request.tries {
                return Err(HttpError::MaxRetries(MaxRetriesExceededError {
                    status,
                    tries: request.tries,
                    correlation_id: response.correlation_id().map(String::from),
                }));
            }

            let delay = Self::calculate_retry_delay(&response, status);
            tracing::warn!(
                status,
                attempt = tries,
                path = %request.path,
                "retrying request after {:.1}s",
                delay.as_secs_f64()
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap` with lowercase keys.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // For 429: honor Retry-After if present. For 500: fixed delay.
        if status == 429 {
            if let Some(retry_after) = response.retry_after() {
                return std::time::Duration::from_secs_f64(retry_after);
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }
}
