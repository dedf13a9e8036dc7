//! Error types for client configuration.
//!
//! This module contains error types used for configuration and validation
//! errors. API-level and transport-level errors live in
//! [`crate::response::ApiError`] and [`crate::clients::HttpError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use commerce_api::{ProjectKey, ConfigError};
//!
//! let result = ProjectKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyProjectKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Project key cannot be empty.
    #[error("Project key cannot be empty. Please provide the key of an existing project.")]
    EmptyProjectKey,

    /// Project key contains invalid characters.
    #[error("Invalid project key '{key}'. Expected lowercase letters, digits, '-' or '_'.")]
    InvalidProjectKey {
        /// The invalid key that was provided.
        key: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid API access token.")]
    EmptyAuthToken,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide an absolute URL with scheme (e.g. 'https://api.example.com').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
