//! Typed request builders for the commerce API.
//!
//! Every endpoint interaction is a value implementing [`ApiRequest`]: the
//! builder accumulates the request's parameters, [`ApiRequest::http_request`]
//! renders it into an [`HttpRequest`], and [`ApiRequest::map_response`] turns
//! the raw [`HttpResponse`] into the typed output. Keeping the two halves
//! separate makes every builder testable without a network.
//!
//! The builders are generic over the [`crate::model::Resource`] trait family:
//!
//! - [`FetchRequest`] / [`QueryRequest`] for reads
//! - [`CreateRequest`] / [`UpdateRequest`] / [`DeleteRequest`] for writes
//! - [`ProductProjectionSearchRequest`] for full-text product search
//!
//! # Example
//!
//! ```rust,no_run
//! use commerce_api::model::{Customer, CustomerUpdateAction};
//! use commerce_api::request::{ApiRequest, UpdateRequest};
//! # async fn example(client: &commerce_api::clients::ApiClient) -> Result<(), commerce_api::response::ApiError> {
//! let request = UpdateRequest::<Customer>::of("c1", 3)
//!     .with_action(CustomerUpdateAction::SetFirstName {
//!         first_name: Some("Jane".to_string()),
//!     });
//! let customer = request.execute(client).await?;
//! # Ok(())
//! # }
//! ```

mod create;
mod delete;
mod fetch;
mod filter;
mod query;
mod query_params;
mod search;
mod update;

pub use create::CreateRequest;
pub use delete::DeleteRequest;
pub use fetch::FetchRequest;
pub use filter::{Facet, Filter, FilterValue};
pub use query::QueryRequest;
pub use query_params::QueryParams;
pub use search::ProductProjectionSearchRequest;
pub use update::UpdateRequest;

use crate::clients::{ApiClient, HttpRequest, HttpResponse};
use crate::response::ApiError;

/// A request against the API, with its typed response mapping.
///
/// Implementors render themselves into an [`HttpRequest`] and know how to
/// interpret the response body. API-level failures (4xx/5xx) come back as
/// `Err(ApiError)` values; only malformed request construction surfaces as
/// an error before anything is sent.
pub trait ApiRequest {
    /// The deserialized success output.
    type Output;

    /// Renders this request into a transport-level [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request is malformed (e.g. a body that
    /// cannot be serialized).
    fn http_request(&self) -> Result<HttpRequest, ApiError>;

    /// Maps a raw response into the typed output.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ErrorResponse`] for non-2xx responses and
    /// [`ApiError::Deserialize`] when a 2xx body does not match `Output`.
    fn map_response(response: &HttpResponse) -> Result<Self::Output, ApiError>;

    /// Sends this request through `client` and maps the response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] for transport failures and the errors of
    /// [`ApiRequest::map_response`] otherwise.
    fn execute(
        &self,
        client: &ApiClient,
    ) -> impl std::future::Future<Output = Result<Self::Output, ApiError>> + Send
    where
        Self: Sync,
    {
        async {
            let request = self.http_request()?;
            let response = client.execute(request).await?;
            Self::map_response(&response)
        }
    }
}

/// How a single resource is addressed: by id or by secondary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    Id(String),
    Key(String),
}

impl Target {
    /// Renders the endpoint path for this target. Keys are embedded in the
    /// path segment (`{endpoint}/key={key}`), so they are percent-encoded.
    pub(crate) fn path(&self, endpoint: &str) -> String {
        match self {
            Self::Id(id) => format!("{endpoint}/{id}"),
            Self::Key(key) => format!("{endpoint}/key={}", urlencoding::encode(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_by_id_path() {
        let target = Target::Id("c1".to_string());
        assert_eq!(target.path("customers"), "customers/c1");
    }

    #[test]
    fn test_target_by_key_path_is_encoded() {
        let target = Target::Key("order state/1".to_string());
        assert_eq!(target.path("states"), "states/key=order%20state%2F1");
    }
}
