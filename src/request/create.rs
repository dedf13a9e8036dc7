//! Create a resource from a draft.

use std::marker::PhantomData;

use crate::clients::{HttpMethod, HttpRequest, HttpResponse};
use crate::model::Creatable;
use crate::response::{map_single, ApiError};

use super::{ApiRequest, QueryParams};

/// A `POST {endpoint}` request carrying a draft body.
#[derive(Debug, Clone)]
pub struct CreateRequest<T: Creatable> {
    draft: T::Draft,
    params: QueryParams,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Creatable> CreateRequest<T> {
    /// Creates a request that will POST the given draft.
    #[must_use]
    pub fn of(draft: T::Draft) -> Self {
        Self {
            draft,
            params: QueryParams::new(),
            _marker: PhantomData,
        }
    }

    /// Adds a reference-expansion path to apply to the created resource;
    /// repeatable.
    #[must_use]
    pub fn expand(mut self, path: impl Into<String>) -> Self {
        self.params.add("expand", path.into(), false);
        self
    }
}

impl<T: Creatable> ApiRequest for CreateRequest<T> {
    type Output = T;

    fn http_request(&self) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_value(&self.draft)?;
        let request = HttpRequest::builder(HttpMethod::Post, T::ENDPOINT)
            .query(self.params.clone())
            .body(body)
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
    use crate::model::{Customer, CustomerDraft};
    use serde_json::json;

    #[test]
    fn test_create_posts_draft_to_collection() {
        let draft = CustomerDraft {
            first_name: Some("Jane".to_string()),
            ..CustomerDraft::of_email("jane@example.com")
        };
        let request = CreateRequest::<Customer>::of(draft).http_request().unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.path_with_query(), "customers");
        assert_eq!(
            request.body.unwrap(),
            json!({"email": "jane@example.com", "firstName": "Jane"})
        );
    }

    #[test]
    fn test_create_with_expansion() {
        let draft = CustomerDraft::of_email("jane@example.com");
        let request = CreateRequest::<Customer>::of(draft)
            .expand("customerGroup")
            .http_request()
            .unwrap();
        assert_eq!(request.path_with_query(), "customers?expand=customerGroup");
    }
}
