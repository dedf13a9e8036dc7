//! Query a resource collection with predicates, sorting, and paging.

use std::marker::PhantomData;

use crate::clients::{HttpMethod, HttpRequest, HttpResponse};
use crate::model::Resource;
use crate::response::{map_paged, ApiError, PagedQueryResult};

use super::{ApiRequest, QueryParams};

/// Default page size applied by the server when no `limit` is set.
const DEFAULT_PAGE_SIZE: u64 = 20;

/// A `GET {endpoint}` request returning a [`PagedQueryResult`].
///
/// `where_` and `sort` are repeatable (multiple predicates are ANDed by the
/// server); `limit` and `offset` are single-valued, so later calls replace
/// earlier ones.
///
/// # Example
///
/// ```rust,no_run
/// use commerce_api::model::Customer;
/// use commerce_api::request::{ApiRequest, QueryRequest};
/// # async fn example(client: &commerce_api::clients::ApiClient) -> Result<(), commerce_api::response::ApiError> {
/// let page = QueryRequest::<Customer>::new()
///     .where_("email = \"jane@example.com\"")
///     .sort("createdAt desc")
///     .limit(50)
///     .execute(client)
///     .await?;
/// println!("{} of {:?} customers", page.count, page.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QueryRequest<T: Resource> {
    params: QueryParams,
    limit: Option<u64>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> Default for QueryRequest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> QueryRequest<T> {
    /// Creates an unconstrained query over the collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: QueryParams::new(),
            limit: None,
            _marker: PhantomData,
        }
    }

    /// Adds a query predicate; repeatable, predicates are ANDed.
    #[must_use]
    pub fn where_(mut self, predicate: impl Into<String>) -> Self {
        self.params.add("where", predicate.into(), false);
        self
    }

    /// Adds a sort expression (e.g. `"createdAt desc"`); repeatable,
    /// applied in the order given.
    #[must_use]
    pub fn sort(mut self, expression: impl Into<String>) -> Self {
        self.params.add("sort", expression.into(), false);
        self
    }

    /// Sets the page size; replaces any previous limit.
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self.params.add("limit", limit.to_string(), true);
        self
    }

    /// Sets the result offset directly; replaces any previous offset.
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.params.add("offset", offset.to_string(), true);
        self
    }

    /// Selects a 1-based page, computing the offset from the current limit
    /// (or the server default of 20 when no limit is set).
    #[must_use]
    pub fn page(self, page: u64) -> Self {
        let size = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        let offset = page.saturating_sub(1).saturating_mul(size);
        self.offset(offset)
    }

    /// Adds a reference-expansion path; repeatable.
    #[must_use]
    pub fn expand(mut self, path: impl Into<String>) -> Self {
        self.params.add("expand", path.into(), false);
        self
    }

    /// Adds a raw parameter; the escape hatch for parameters without a
    /// dedicated method. See [`QueryParams::add`] for `replace`.
    #[must_use]
    pub fn with_param(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        replace: bool,
    ) -> Self {
        self.params.add(name, value, replace);
        self
    }
}

impl<T: Resource> ApiRequest for QueryRequest<T> {
    type Output = PagedQueryResult<T>;

    fn http_request(&self) -> Result<HttpRequest, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, T::ENDPOINT)
            .query(self.params.clone())
            .build()
            .map_err(crate::clients::HttpError::from)?;
        Ok(request)
    }

    fn map_response(response: &HttpResponse) -> Result<Self::Output, ApiError> {
        map_paged(response)
    }
}
