//! Full-text product search with filters and facets.

use crate::clients::{HttpMethod, HttpRequest, HttpResponse};
use crate::model::ProductProjection;
use crate::response::{map_search, ApiError, PagedSearchResult};

use super::{ApiRequest, Facet, Filter, QueryParams};

const DEFAULT_PAGE_SIZE: u64 = 20;

/// A `GET product-projections/search` request returning a
/// [`PagedSearchResult`] with optional facets.
///
/// The three filter parameters differ in where they apply:
///
/// - [`filter`](Self::filter) restricts results after facets are computed;
/// - [`filter_query`](Self::filter_query) restricts results before facets
///   are computed;
/// - [`filter_facets`](Self::filter_facets) restricts facet counting only.
///
/// All three are repeatable, as are [`facet`](Self::facet) and
/// [`sort`](Self::sort).
///
/// # Example
///
/// ```rust,no_run
/// use commerce_api::request::{ApiRequest, Facet, Filter, ProductProjectionSearchRequest};
/// # async fn example(client: &commerce_api::clients::ApiClient) -> Result<(), commerce_api::response::ApiError> {
/// let result = ProductProjectionSearchRequest::new()
///     .text("en", "spoon")
///     .fuzzy(true)
///     .filter(&Filter::term("variants.attributes.material", "beech"))
///     .facet(&Facet::of_path("variants.attributes.color"))
///     .execute(client)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductProjectionSearchRequest {
    params: QueryParams,
    limit: Option<u64>,
}

impl ProductProjectionSearchRequest {
    /// Creates an unconstrained search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full-text search term for a language; one term per
    /// language, a later call for the same language replaces the earlier.
    #[must_use]
    pub fn text(mut self, lang: &str, term: impl Into<String>) -> Self {
        self.params.add(format!("text.{lang}"), term.into(), true);
        self
    }

    /// Enables or disables fuzzy matching of the text term.
    #[must_use]
    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.params.add("fuzzy", fuzzy.to_string(), true);
        self
    }

    /// Adds a result filter applied after facet computation; repeatable.
    #[must_use]
    pub fn filter(mut self, filter: &Filter) -> Self {
        self.params.add("filter", filter.to_string(), false);
        self
    }

    /// Adds a filter applied before facet computation; repeatable.
    #[must_use]
    pub fn filter_query(mut self, filter: &Filter) -> Self {
        self.params.add("filter.query", filter.to_string(), false);
        self
    }

    /// Adds a filter applied to facet counting only; repeatable.
    #[must_use]
    pub fn filter_facets(mut self, filter: &Filter) -> Self {
        self.params.add("filter.facets", filter.to_string(), false);
        self
    }

    /// Requests a facet; repeatable.
    #[must_use]
    pub fn facet(mut self, facet: &Facet) -> Self {
        self.params.add("facet", facet.to_string(), false);
        self
    }

    /// Searches the staged projection instead of the current one.
    #[must_use]
    pub fn staged(mut self, staged: bool) -> Self {
        self.params.add("staged", staged.to_string(), true);
        self
    }

    /// Asks the server to flag which variants matched the filters.
    #[must_use]
    pub fn mark_matching_variants(mut self, mark: bool) -> Self {
        self.params.add("markMatchingVariants", mark.to_string(), true);
        self
    }

    /// Adds a sort expression; repeatable.
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

    /// Sets the result offset; replaces any previous offset.
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.params.add("offset", offset.to_string(), true);
        self
    }

    /// Selects a 1-based page from the current limit (server default 20).
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
}

impl ApiRequest for ProductProjectionSearchRequest {
    type Output = PagedSearchResult<ProductProjection>;

    fn http_request(&self) -> Result<HttpRequest, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, "product-projections/search")
            .query(self.params.clone())
            .build()
            .map_err(crate::clients::HttpError::from)?;
        Ok(request)
    }

    fn map_response(response: &HttpResponse) -> Result<Self::Output, ApiError> {
        map_search(response)
    }
}
