//! Configuration types for the commerce API client.
//!
//! This module provides the core configuration types used to initialize
//! and configure the client for API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: The main configuration struct holding all client settings
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`ProjectKey`]: A validated project key newtype
//! - [`AuthToken`]: A validated access token newtype with masked debug output
//! - [`ApiUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use commerce_api::{ApiConfig, ProjectKey, AuthToken, ApiUrl};
//!
//! let config = ApiConfig::builder()
//!     .project_key(ProjectKey::new("my-project").unwrap())
//!     .auth_token(AuthToken::new("my-access-token").unwrap())
//!     .api_url(ApiUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, AuthToken, ProjectKey};

use crate::error::ConfigError;

/// Configuration for the commerce API client.
///
/// This struct holds everything needed to talk to one project: the project
/// key (scoping every request URL), the OAuth bearer token, and the regional
/// API host.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use commerce_api::{ApiConfig, ProjectKey, AuthToken, ApiUrl};
///
/// let config = ApiConfig::builder()
///     .project_key(ProjectKey::new("my-project").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .api_url(ApiUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.project_key().as_ref(), "my-project");
/// ```
#[derive(Clone, Debug)]
pub struct ApiConfig {
    project_key: ProjectKey,
    auth_token: AuthToken,
    api_url: ApiUrl,
    user_agent_prefix: Option<String>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the project key.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    /// Returns the access token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// Required fields are `project_key`, `auth_token`, and `api_url`.
///
/// # Example
///
/// ```rust
/// use commerce_api::{ApiConfig, ProjectKey, AuthToken, ApiUrl};
///
/// let config = ApiConfig::builder()
///     .project_key(ProjectKey::new("my-project").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .api_url(ApiUrl::new("https://api.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    project_key: Option<ProjectKey>,
    auth_token: Option<AuthToken>,
    api_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project key (required).
    #[must_use]
    pub fn project_key(mut self, key: ProjectKey) -> Self {
        self.project_key = Some(key);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a required field
    /// has not been set.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let project_key = self
            .project_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "project_key",
            })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;

        Ok(ApiConfig {
            project_key,
            auth_token,
            api_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ApiConfig {
        ApiConfig::builder()
            .project_key(ProjectKey::new("test-project").unwrap())
            .auth_token(AuthToken::new("test-token").unwrap())
            .api_url(ApiUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = test_config();
        assert_eq!(config.project_key().as_ref(), "test-project");
        assert_eq!(config.auth_token().as_ref(), "test-token");
        assert_eq!(config.api_url().as_ref(), "https://api.example.com");
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_requires_project_key() {
        let result = ApiConfig::builder()
            .auth_token(AuthToken::new("token").unwrap())
            .api_url(ApiUrl::new("https://api.example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "project_key"
            })
        ));
    }

    #[test]
    fn test_builder_requires_auth_token() {
        let result = ApiConfig::builder()
            .project_key(ProjectKey::new("p").unwrap())
            .api_url(ApiUrl::new("https://api.example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "auth_token" })
        ));
    }

    #[test]
    fn test_builder_requires_api_url() {
        let result = ApiConfig::builder()
            .project_key(ProjectKey::new("p").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_url" })
        ));
    }

    #[test]
    fn test_user_agent_prefix_is_stored() {
        let config = ApiConfig::builder()
            .project_key(ProjectKey::new("p").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .api_url(ApiUrl::new("https://api.example.com").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = test_config();
        let cloned = config.clone();
        let debug = format!("{cloned:?}");
        // Token value must not leak through Debug
        assert!(!debug.contains("test-token"));
    }
}
