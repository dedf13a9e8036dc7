//! Delete a resource at an observed version.

use std::marker::PhantomData;

use crate::clients::{HttpMethod, HttpRequest, HttpResponse};
use crate::model::{KeyIdentifiable, Resource};
use crate::response::{map_single, ApiError};

use super::{ApiRequest, QueryParams, Target};

/// A `DELETE {endpoint}/{id}?version=n` request.
///
/// Deletion is versioned like updates: a stale version yields a 409 the
/// caller can detect via [`ApiError::is_concurrent_modification`]. The
/// response body is the deleted resource's last representation.
#[derive(Debug, Clone)]
pub struct DeleteRequest<T: Resource> {
    target: Target,
    version: u64,
    params: QueryParams,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> DeleteRequest<T> {
    /// Deletes the resource with the given id at the given observed version.
    #[must_use]
    pub fn of(id: impl Into<String>, version: u64) -> Self {
        Self::new(Target::Id(id.into()), version)
    }

    fn new(target: Target, version: u64) -> Self {
        Self {
            target,
            version,
            params: QueryParams::new(),
            _marker: PhantomData,
        }
    }
}

impl<T: Resource + KeyIdentifiable> DeleteRequest<T> {
    /// Deletes the resource with the given secondary key.
    #[must_use]
    pub fn of_key(key: impl Into<String>, version: u64) -> Self {
        Self::new(Target::Key(key.into()), version)
    }
}

impl<T: Resource> ApiRequest for DeleteRequest<T> {
    type Output = T;

    fn http_request(&self) -> Result<HttpRequest, ApiError> {
        let mut params = self.params.clone();
        params.add("version", self.version.to_string(), true);
        let request = HttpRequest::builder(HttpMethod::Delete, self.target.path(T::ENDPOINT))
            .query(params)
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
    use crate::model::{DiscountCode, State};

    #[test]
    fn test_delete_by_id_carries_version_param() {
        let http = DeleteRequest::<DiscountCode>::of("d1", 4).http_request().unwrap();
        assert_eq!(http.http_method, HttpMethod::Delete);
        assert_eq!(http.path_with_query(), "discount-codes/d1?version=4");
        assert!(http.body.is_none());
    }

    #[test]
    fn test_delete_by_key() {
        let http = DeleteRequest::<State>::of_key("shipped", 1).http_request().unwrap();
        assert_eq!(http.path_with_query(), "states/key=shipped?version=1");
    }
}
