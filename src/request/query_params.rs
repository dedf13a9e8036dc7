//! Ordered query parameter collection.
//!
//! The API relies on repeated query parameters (`?expand=a&expand=b`) for
//! multi-value inputs; comma-joining is not accepted. [`QueryParams`] keeps
//! parameters as an ordered list of name/value pairs so repeated parameters
//! are emitted in insertion order, which keeps generated URLs reproducible.

use std::fmt;

/// An ordered collection of URL query parameters.
///
/// Every parameter contribution is normalized to a `(name, value, replace)`
/// triple via [`QueryParams::add`]:
///
/// - `replace = true` overwrites all previous values of the same name
///   (single-value parameters such as `limit`).
/// - `replace = false` appends, producing a repeated parameter in the final
///   query string (repeatable parameters such as `expand` or `where`).
///
/// # Example
///
/// ```rust
/// use commerce_api::request::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.add("expand", "customerGroup", false);
/// params.add("expand", "stores[*]", false);
/// params.add("limit", "20", true);
/// params.add("limit", "50", true);
///
/// assert_eq!(
///     params.to_query_string(),
///     "expand=customerGroup&expand=stores%5B%2A%5D&limit=50"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Adds a parameter.
    ///
    /// With `replace = true` any previous values of `name` are removed
    /// first; the new value takes the position at the end of the list.
    /// With `replace = false` the value is appended, keeping prior values.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>, replace: bool) {
        let name = name.into();
        if replace {
            self.params.retain(|(n, _)| n != &name);
        }
        self.params.push((name, value.into()));
    }

    /// Returns all values recorded for `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns the first value recorded for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of name/value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterates over the name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serializes the parameters into a URL-encoded query string.
    ///
    /// The result does not include a leading `?`. Repeated parameters are
    /// emitted as repeated keys in insertion order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.params {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&urlencoding::encode(name));
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
