//! Response mapping for the commerce API.
//!
//! This module provides the shared machinery that turns raw
//! [`HttpResponse`](crate::clients::HttpResponse) values into typed results:
//!
//! - [`ApiError`] and [`ErrorResponse`]: the typed error result every
//!   request mapping can produce
//! - [`PagedQueryResult`] / [`PagedSearchResult`]: collection shapes
//! - [`map_single`] / [`map_paged`] / [`map_search`]: shape selection used
//!   by the request builders
//!
//! Deserialization policy: unknown JSON fields are ignored (forward
//! compatibility); missing optional fields map to `None`, never a default
//! value, so "server omitted" stays distinguishable from "server sent
//! empty/zero".

mod errors;
mod paged;

pub use errors::{ApiError, ErrorDetail, ErrorResponse, CONCURRENT_MODIFICATION};
pub use paged::{FacetResult, PagedQueryResult, PagedSearchResult, RangeFacetItem, TermFacetItem};

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;

/// Maps a response expected to carry one resource.
///
/// # Errors
///
/// Returns [`ApiError::ErrorResponse`] for non-2xx statuses and
/// [`ApiError::Deserialize`] if a success body does not match `T`.
pub fn map_single<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    if response.is_success() {
        serde_json::from_value(response.body.clone()).map_err(ApiError::from)
    } else {
        Err(ApiError::from_response(response))
    }
}

/// Maps a response expected to carry a paged collection.
///
/// # Errors
///
/// Returns [`ApiError::ErrorResponse`] for non-2xx statuses and
/// [`ApiError::Deserialize`] if a success body does not match the paged
/// shape.
pub fn map_paged<T: DeserializeOwned>(
    response: &HttpResponse,
) -> Result<PagedQueryResult<T>, ApiError> {
    map_single(response)
}

/// Maps a response expected to carry a paged search result with facets.
///
/// # Errors
///
/// Returns [`ApiError::ErrorResponse`] for non-2xx statuses and
/// [`ApiError::Deserialize`] if a success body does not match the search
/// shape.
pub fn map_search<T: DeserializeOwned>(
    response: &HttpResponse,
) -> Result<PagedSearchResult<T>, ApiError> {
    map_single(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: String,
        version: u64,
    }

    #[test]
    fn test_map_single_success() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"id": "t1", "version": 4}));
        let thing: Thing = map_single(&response).unwrap();
        assert_eq!(thing.id, "t1");
        assert_eq!(thing.version, 4);
    }

    #[test]
    fn test_map_single_error_status_yields_typed_error() {
        let response = HttpResponse::new(
            409,
            HashMap::new(),
            json!({
                "statusCode": 409,
                "message": "conflict",
                "errors": [{"code": "ConcurrentModification", "message": "conflict"}]
            }),
        );
        let result: Result<Thing, ApiError> = map_single(&response);
        let error = result.unwrap_err();
        assert_eq!(error.status(), Some(409));
        assert!(error.is_concurrent_modification());
    }

    #[test]
    fn test_map_single_bad_body_is_deserialize_error() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"unexpected": "shape"}));
        let result: Result<Thing, ApiError> = map_single(&response);
        assert!(matches!(result, Err(ApiError::Deserialize(_))));
    }

    #[test]
    fn test_map_paged_empty_results() {
        let response =
            HttpResponse::new(200, HashMap::new(), json!({"offset": 0, "count": 0}));
        let page: PagedQueryResult<Thing> = map_paged(&response).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_map_search_with_facets() {
        let response = HttpResponse::new(
            200,
            HashMap::new(),
            json!({
                "results": [{"id": "p1", "version": 1}],
                "facets": {"categories.id": {"type": "terms", "terms": []}}
            }),
        );
        let page: PagedSearchResult<Thing> = map_search(&response).unwrap();
        assert_eq!(page.len(), 1);
        assert!(page.facet("categories.id").is_some());
    }
}
