//! # Commerce API Rust Client
//!
//! A Rust client for a composable commerce platform HTTP API, providing
//! type-safe configuration, resource models, typed request builders, and
//! response mapping for the project-scoped REST endpoints.
//!
//! ## Overview
//!
//! This client provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for the project key, auth token, and API URL
//! - Resource models with serde representations matching the wire format
//! - Update actions as tagged unions serializing to `{"action": ..., ...}`
//! - Typed request builders for fetch, query, create, update, delete, and
//!   product search via [`request`]
//! - Response mapping into single resources, paged collections, and search
//!   results with facets via [`response`]
//! - Async HTTP client with retry support for rate limiting via [`clients`]
//!
//! ## Quick Start
//!
//! ```rust
//! use commerce_api::{ApiConfig, ApiUrl, AuthToken, ProjectKey};
//!
//! // Create configuration using the builder pattern
//! let config = ApiConfig::builder()
//!     .project_key(ProjectKey::new("my-project").unwrap())
//!     .auth_token(AuthToken::new("access-token").unwrap())
//!     .api_url(ApiUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Updating a Resource
//!
//! Updates are command submissions: the caller states the last version it
//! observed and an ordered list of actions. A stale version is answered
//! with a 409 that surfaces as a typed error, never as a panic and never
//! with an automatic retry:
//!
//! ```rust,ignore
//! use commerce_api::clients::ApiClient;
//! use commerce_api::model::{Customer, CustomerUpdateAction};
//! use commerce_api::request::{ApiRequest, UpdateRequest};
//!
//! let client = ApiClient::new(&config)?;
//!
//! let result = UpdateRequest::<Customer>::of("c1", 3)
//!     .with_action(CustomerUpdateAction::SetFirstName {
//!         first_name: Some("Jane".to_string()),
//!     })
//!     .execute(&client)
//!     .await;
//!
//! match result {
//!     Ok(customer) => println!("now at version {}", customer.version),
//!     Err(e) if e.is_concurrent_modification() => {
//!         // re-fetch, rebase the actions, resubmit — caller's choice
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Searching Products
//!
//! ```rust,ignore
//! use commerce_api::request::{ApiRequest, Facet, Filter, ProductProjectionSearchRequest};
//!
//! let result = ProductProjectionSearchRequest::new()
//!     .text("en", "spoon")
//!     .filter(&Filter::term("variants.attributes.material", "beech"))
//!     .facet(&Facet::of_path("variants.attributes.color"))
//!     .execute(&client)
//!     .await?;
//!
//! for product in result.iter() {
//!     println!("{:?}", product.name.get("en"));
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Errors as values**: API-level failures are `Err(ApiError)` results;
//!   panics are reserved for programmer errors

pub mod clients;
pub mod config;
pub mod error;
pub mod model;
pub mod request;
pub mod response;

// Re-export public types at crate root for convenience
pub use config::{ApiConfig, ApiConfigBuilder, ApiUrl, AuthToken, ProjectKey};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{ApiClient, HttpError, HttpMethod, HttpRequest, HttpResponse};

// Re-export the request/response surface
pub use request::{
    ApiRequest, CreateRequest, DeleteRequest, Facet, FetchRequest, Filter, FilterValue,
    ProductProjectionSearchRequest, QueryParams, QueryRequest, UpdateRequest,
};
pub use response::{ApiError, ErrorResponse, PagedQueryResult, PagedSearchResult};
