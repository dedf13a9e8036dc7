//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated project key.
///
/// Every API endpoint is scoped to a project; the project key becomes the
/// first path segment of every request URL. This newtype ensures the key is
/// non-empty and contains only the characters the platform accepts.
///
/// # Example
///
/// ```rust
/// use commerce_api::ProjectKey;
///
/// let key = ProjectKey::new("my-project").unwrap();
/// assert_eq!(key.as_ref(), "my-project");
///
/// assert!(ProjectKey::new("No Spaces Allowed").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectKey(String);

impl ProjectKey {
    /// Creates a new validated project key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyProjectKey`] if the key is empty, or
    /// [`ConfigError::InvalidProjectKey`] if it contains characters other
    /// than lowercase letters, digits, `-` or `_`.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyProjectKey);
        }
        let valid = key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !valid {
            return Err(ConfigError::InvalidProjectKey { key });
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ProjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying
/// `AuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use commerce_api::AuthToken;
///
/// let token = AuthToken::new("my-access-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated API base URL.
///
/// The base URL points at the platform's regional API host. A trailing slash
/// is stripped so URL assembly can always join segments with `/`.
///
/// # Example
///
/// ```rust
/// use commerce_api::ApiUrl;
///
/// let url = ApiUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com");
///
/// assert!(ApiUrl::new("api.example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL does not start with
    /// `http://` or `https://`, or has no host part after the scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(url.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidApiUrl { url }),
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_key_accepts_valid_keys() {
        assert!(ProjectKey::new("my-project").is_ok());
        assert!(ProjectKey::new("project_2").is_ok());
        assert!(ProjectKey::new("p").is_ok());
    }

    #[test]
    fn test_project_key_rejects_empty() {
        assert!(matches!(
            ProjectKey::new(""),
            Err(ConfigError::EmptyProjectKey)
        ));
    }

    #[test]
    fn test_project_key_rejects_invalid_characters() {
        assert!(matches!(
            ProjectKey::new("My Project"),
            Err(ConfigError::InvalidProjectKey { .. })
        ));
        assert!(matches!(
            ProjectKey::new("UPPER"),
            Err(ConfigError::InvalidProjectKey { .. })
        ));
    }

    #[test]
    fn test_auth_token_rejects_empty() {
        assert!(matches!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken)));
    }

    #[test]
    fn test_auth_token_debug_is_masked() {
        let token = AuthToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "AuthToken(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let url = ApiUrl::new("https://api.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_api_url_requires_scheme() {
        assert!(matches!(
            ApiUrl::new("api.example.com"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(matches!(
            ApiUrl::new("https://"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn test_api_url_accepts_http_for_local_testing() {
        assert!(ApiUrl::new("http://127.0.0.1:8080").is_ok());
    }
}
