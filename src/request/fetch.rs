//! Fetch a single resource by id or key.

use std::marker::PhantomData;

use crate::clients::{HttpMethod, HttpRequest, HttpResponse};
use crate::model::{KeyIdentifiable, Resource};
use crate::response::{map_single, ApiError};

use super::{ApiRequest, QueryParams, Target};

/// A `GET {endpoint}/{id}` (or `{endpoint}/key={key}`) request.
///
/// # Example
///
/// ```rust,no_run
/// use commerce_api::model::Customer;
/// use commerce_api::request::{ApiRequest, FetchRequest};
/// # async fn example(client: &commerce_api::clients::ApiClient) -> Result<(), commerce_api::response::ApiError> {
/// let customer = FetchRequest::<Customer>::of("c1")
///     .expand("customerGroup")
///     .execute(client)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FetchRequest<T: Resource> {
    target: Target,
    params: QueryParams,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> FetchRequest<T> {
    /// Fetches the resource with the given id.
    #[must_use]
    pub fn of(id: impl Into<String>) -> Self {
        Self {
            target: Target::Id(id.into()),
            params: QueryParams::new(),
            _marker: PhantomData,
        }
    }

    /// Adds a reference-expansion path; repeatable.
    #[must_use]
    pub fn expand(mut self, path: impl Into<String>) -> Self {
        self.params.add("expand", path.into(), false);
        self
    }
}

impl<T: Resource + KeyIdentifiable> FetchRequest<T> {
    /// Fetches the resource with the given secondary key.
    #[must_use]
    pub fn of_key(key: impl Into<String>) -> Self {
        Self {
            target: Target::Key(key.into()),
            params: QueryParams::new(),
            _marker: PhantomData,
        }
    }
}

impl<T: Resource> ApiRequest for FetchRequest<T> {
    type Output = T;

    fn http_request(&self) -> Result<HttpRequest, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.target.path(T::ENDPOINT))
            .query(self.params.clone())
            .build()
            .map_err(crate::clients::HttpError::from)?;
        Ok(request)
    }

    fn map_response(response: &HttpResponse) -> Result<Self::Output, ApiError> {
        map_single(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, DiscountCode, State};

    #[test]
    fn test_fetch_by_id_renders_get() {
        let request = FetchRequest::<Customer>::of("c1").http_request().unwrap();
        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path_with_query(), "customers/c1");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_fetch_by_key_renders_key_segment() {
        let request = FetchRequest::<State>::of_key("shipped")
            .http_request()
            .unwrap();
        assert_eq!(request.path_with_query(), "states/key=shipped");
    }

    #[test]
    fn test_expand_repeats() {
        let request = FetchRequest::<Customer>::of("c1")
            .expand("customerGroup")
            .expand("stores[*]")
            .http_request()
            .unwrap();
        assert_eq!(
            request.path_with_query(),
            "customers/c1?expand=customerGroup&expand=stores%5B%2A%5D"
        );
    }

    #[test]
    fn test_discount_codes_fetch_by_id_only() {
        // DiscountCode has no key addressing; this line would not compile:
        // let _ = FetchRequest::<DiscountCode>::of_key("k");
        let request = FetchRequest::<DiscountCode>::of("d1").http_request().unwrap();
        assert_eq!(request.path_with_query(), "discount-codes/d1");
    }
}
