//! Paged collection response wrappers.
//!
//! Query endpoints return a paged collection shape and search endpoints the
//! same shape plus facets:
//!
//! ```json
//! {
//!   "offset": 0, "limit": 20, "count": 2, "total": 57,
//!   "results": [ ... ],
//!   "facets": { "variants.attributes.color": { "type": "terms", ... } }
//! }
//! ```
//!
//! Absent or empty `results` deserialize to an empty vector, never an error.
//! `total` stays `Option` to distinguish "server omitted" from zero.

use std::collections::HashMap;
use std::ops::Deref;

use serde::Deserialize;

/// A page of query results with paging metadata.
///
/// The struct implements `Deref<Target = Vec<T>>` for transparent access to
/// the results, mirroring how callers mostly just iterate a page.
///
/// # Example
///
/// ```rust
/// use commerce_api::response::PagedQueryResult;
///
/// let json = r#"{"offset":0,"count":0,"total":0,"results":[]}"#;
/// let page: PagedQueryResult<serde_json::Value> = serde_json::from_str(json).unwrap();
/// assert!(page.is_empty());
/// assert_eq!(page.total, Some(0));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedQueryResult<T> {
    /// Number of results skipped.
    #[serde(default)]
    pub offset: u64,
    /// Page size limit the server applied, if reported.
    #[serde(default)]
    pub limit: Option<u64>,
    /// Number of results in this page.
    #[serde(default)]
    pub count: u64,
    /// Total number of matching resources, if the server reported it.
    #[serde(default)]
    pub total: Option<u64>,
    /// The results of this page; empty when the server sent none.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> PagedQueryResult<T> {
    /// Consumes the page and returns the results.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    /// Returns `true` if a further page exists beyond this one.
    ///
    /// Requires the server to have reported `total`; without it, `false`.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.total
            .is_some_and(|total| self.offset + self.count < total)
    }
}

impl<T> Deref for PagedQueryResult<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}

/// One term bucket of a terms facet.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TermFacetItem {
    /// The term value; string for text attributes, number for numeric ones.
    pub term: serde_json::Value,
    /// Number of hits carrying this term.
    pub count: u64,
}

/// One bucket of a range facet.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RangeFacetItem {
    /// Inclusive lower bound, if bounded.
    #[serde(default)]
    pub from: Option<f64>,
    /// Exclusive upper bound, if bounded.
    #[serde(default)]
    pub to: Option<f64>,
    /// Number of hits in this range.
    pub count: u64,
    /// Smallest value observed in this range.
    #[serde(default)]
    pub min: Option<f64>,
    /// Largest value observed in this range.
    #[serde(default)]
    pub max: Option<f64>,
    /// Mean of the values in this range.
    #[serde(default)]
    pub mean: Option<f64>,
}

/// The result of one facet expression, keyed by facet name in
/// [`PagedSearchResult::facets`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FacetResult {
    /// Term buckets with counts.
    Terms {
        /// The term buckets.
        #[serde(default)]
        terms: Vec<TermFacetItem>,
        /// Total number of terms counted.
        #[serde(default)]
        total: Option<u64>,
        /// Number of hits without a value for the faceted field.
        #[serde(default)]
        missing: Option<u64>,
        /// Number of terms not included in `terms`.
        #[serde(default)]
        other: Option<u64>,
    },
    /// Range buckets with counts and statistics.
    Range {
        /// The range buckets.
        #[serde(default)]
        ranges: Vec<RangeFacetItem>,
    },
    /// The count produced by a filtered facet expression.
    Filter {
        /// Number of hits matching the facet filter.
        count: u64,
    },
}

/// A page of search results: query paging metadata plus optional facets.
///
/// `facets` is present only when the request included facet expressions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedSearchResult<T> {
    /// Number of results skipped.
    #[serde(default)]
    pub offset: u64,
    /// Page size limit the server applied, if reported.
    #[serde(default)]
    pub limit: Option<u64>,
    /// Number of results in this page.
    #[serde(default)]
    pub count: u64,
    /// Total number of matching resources, if the server reported it.
    #[serde(default)]
    pub total: Option<u64>,
    /// The search hits of this page; empty when the server sent none.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Facet results keyed by facet expression, when facets were requested.
    #[serde(default)]
    pub facets: Option<HashMap<String, FacetResult>>,
}

impl<T> PagedSearchResult<T> {
    /// Consumes the page and returns the search hits.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    /// Returns the facet result for the given facet expression, if present.
    #[must_use]
    pub fn facet(&self, name: &str) -> Option<&FacetResult> {
        self.facets.as_ref().and_then(|f| f.get(name))
    }
}

impl<T> Deref for PagedSearchResult<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    struct Hit {
        id: String,
    }

    #[test]
    fn test_paged_result_deserializes_metadata_and_results() {
        let page: PagedQueryResult<Hit> = serde_json::from_value(json!({
            "offset": 20,
            "limit": 20,
            "count": 2,
            "total": 57,
            "results": [{"id": "a"}, {"id": "b"}]
        }))
        .unwrap();

        assert_eq!(page.offset, 20);
        assert_eq!(page.limit, Some(20));
        assert_eq!(page.count, 2);
        assert_eq!(page.total, Some(57));
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, "a");
    }

    #[test]
    fn test_absent_results_maps_to_empty_collection() {
        let page: PagedQueryResult<Hit> =
            serde_json::from_value(json!({"offset": 0, "count": 0})).unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_empty_results_maps_to_empty_collection() {
        let page: PagedQueryResult<Hit> =
            serde_json::from_value(json!({"offset": 0, "count": 0, "total": 0, "results": []}))
                .unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total, Some(0));
    }

    #[test]
    fn test_total_absent_is_distinguishable_from_zero() {
        let omitted: PagedQueryResult<Hit> = serde_json::from_value(json!({"results": []})).unwrap();
        let zero: PagedQueryResult<Hit> =
            serde_json::from_value(json!({"total": 0, "results": []})).unwrap();

        assert_eq!(omitted.total, None);
        assert_eq!(zero.total, Some(0));
    }

    #[test]
    fn test_has_next_page() {
        let page: PagedQueryResult<Hit> = serde_json::from_value(json!({
            "offset": 0, "count": 20, "total": 57,
            "results": (0..20).map(|i| json!({"id": i.to_string()})).collect::<Vec<_>>()
        }))
        .unwrap();
        assert!(page.has_next_page());

        let last: PagedQueryResult<Hit> = serde_json::from_value(json!({
            "offset": 40, "count": 17, "total": 57, "results": []
        }))
        .unwrap();
        assert!(!last.has_next_page());
    }

    #[test]
    fn test_search_result_parses_terms_facet() {
        let page: PagedSearchResult<Hit> = serde_json::from_value(json!({
            "offset": 0, "count": 1, "total": 1,
            "results": [{"id": "p1"}],
            "facets": {
                "variants.attributes.color": {
                    "type": "terms",
                    "total": 3,
                    "terms": [
                        {"term": "red", "count": 2},
                        {"term": "blue", "count": 1}
                    ]
                }
            }
        }))
        .unwrap();

        match page.facet("variants.attributes.color") {
            Some(FacetResult::Terms { terms, total, .. }) => {
                assert_eq!(*total, Some(3));
                assert_eq!(terms.len(), 2);
                assert_eq!(terms[0].term, json!("red"));
                assert_eq!(terms[0].count, 2);
            }
            other => panic!("expected terms facet, got {other:?}"),
        }
    }

    #[test]
    fn test_search_result_parses_range_facet() {
        let page: PagedSearchResult<Hit> = serde_json::from_value(json!({
            "results": [],
            "facets": {
                "variants.price.centAmount": {
                    "type": "range",
                    "ranges": [
                        {"from": 0.0, "to": 1000.0, "count": 5, "min": 100.0, "max": 900.0, "mean": 450.0}
                    ]
                }
            }
        }))
        .unwrap();

        match page.facet("variants.price.centAmount") {
            Some(FacetResult::Range { ranges }) => {
                assert_eq!(ranges.len(), 1);
                assert_eq!(ranges[0].count, 5);
                assert_eq!(ranges[0].to, Some(1000.0));
            }
            other => panic!("expected range facet, got {other:?}"),
        }
    }

    #[test]
    fn test_search_result_without_facets() {
        let page: PagedSearchResult<Hit> =
            serde_json::from_value(json!({"results": [{"id": "p1"}]})).unwrap();
        assert!(page.facets.is_none());
        assert!(page.facet("anything").is_none());
    }
}
