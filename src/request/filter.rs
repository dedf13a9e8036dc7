//! Typed filter and facet expressions for product search.
//!
//! Search endpoints take filter expressions in a small textual grammar:
//! a dotted attribute path, a colon, and a term list, range, or existence
//! check. [`Filter`] and [`Facet`] build those strings through `Display`,
//! so callers never concatenate filter syntax by hand:
//!
//! - `variants.attributes.color:"red"`
//! - `variants.attributes.color:("red","blue")`
//! - `variants.price.centAmount:range(100 to 200)`
//! - `variants.attributes.sleeve:exists`

use std::fmt;

/// A literal on the right-hand side of a filter expression.
///
/// Strings are rendered double-quoted with `"` and `\` escaped; numbers and
/// booleans are rendered bare.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => {
                let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, "\"{escaped}\"")
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FilterValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// A filter expression over a dotted attribute path.
///
/// Built through the constructors and rendered through `Display`; the
/// rendered form is what goes on the wire as the value of `filter`,
/// `filter.query`, or `filter.facets` parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Term match: one value renders as `path:value`, several as a
    /// parenthesized set `path:(v1,v2)` matching any member.
    Term {
        path: String,
        values: Vec<FilterValue>,
    },
    /// Range match `path:range(from to to)`; an open bound renders as `*`.
    Range {
        path: String,
        from: Option<FilterValue>,
        to: Option<FilterValue>,
    },
    /// Matches documents where the path has any value.
    Exists { path: String },
    /// Matches documents where the path has no value.
    Missing { path: String },
}

impl Filter {
    /// Term filter matching a single value.
    #[must_use]
    pub fn term(path: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Term {
            path: path.into(),
            values: vec![value.into()],
        }
    }

    /// Term filter matching any of the given values.
    #[must_use]
    pub fn terms(
        path: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<FilterValue>>,
    ) -> Self {
        Self::Term {
            path: path.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Range filter; pass `None` for an open bound.
    #[must_use]
    pub fn range(
        path: impl Into<String>,
        from: Option<impl Into<FilterValue>>,
        to: Option<impl Into<FilterValue>>,
    ) -> Self {
        Self::Range {
            path: path.into(),
            from: from.map(Into::into),
            to: to.map(Into::into),
        }
    }

    /// Existence filter.
    #[must_use]
    pub fn exists(path: impl Into<String>) -> Self {
        Self::Exists { path: path.into() }
    }

    /// Absence filter.
    #[must_use]
    pub fn missing(path: impl Into<String>) -> Self {
        Self::Missing { path: path.into() }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term { path, values } => {
                if let [value] = values.as_slice() {
                    write!(f, "{path}:{value}")
                } else {
                    let list = values
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(",");
                    write!(f, "{path}:({list})")
                }
            }
            Self::Range { path, from, to } => {
                let from = from.as_ref().map_or_else(|| "*".to_string(), ToString::to_string);
                let to = to.as_ref().map_or_else(|| "*".to_string(), ToString::to_string);
                write!(f, "{path}:range({from} to {to})")
            }
            Self::Exists { path } => write!(f, "{path}:exists"),
            Self::Missing { path } => write!(f, "{path}:missing"),
        }
    }
}

/// A facet expression: a path or filter to aggregate over, with an optional
/// alias and an optional switch to count products instead of variants.
///
/// Renders as `{expression}[ as {alias}][ counting products]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    expression: String,
    alias: Option<String>,
    counting_products: bool,
}

impl Facet {
    /// Facet over a dotted attribute path (term facet).
    #[must_use]
    pub fn of_path(path: impl Into<String>) -> Self {
        Self {
            expression: path.into(),
            alias: None,
            counting_products: false,
        }
    }

    /// Facet over a filter expression (e.g. a range facet).
    #[must_use]
    pub fn of_filter(filter: &Filter) -> Self {
        Self {
            expression: filter.to_string(),
            alias: None,
            counting_products: false,
        }
    }

    /// Names the facet in the response instead of the raw expression.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Counts matching products rather than matching variants.
    #[must_use]
    pub const fn counting_products(mut self) -> Self {
        self.counting_products = true;
        self
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)?;
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        if self.counting_products {
            write!(f, " counting products")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_term_renders_quoted() {
        let filter = Filter::term("variants.attributes.color", "red");
        assert_eq!(filter.to_string(), "variants.attributes.color:\"red\"");
    }

    #[test]
    fn test_term_set_renders_parenthesized() {
        let filter = Filter::terms("variants.attributes.color", ["red", "blue"]);
        assert_eq!(
            filter.to_string(),
            "variants.attributes.color:(\"red\",\"blue\")"
        );
    }

    #[test]
    fn test_string_values_escape_quotes_and_backslashes() {
        let filter = Filter::term("name.en", "say \"hi\" \\ bye");
        assert_eq!(filter.to_string(), "name.en:\"say \\\"hi\\\" \\\\ bye\"");
    }

    #[test]
    fn test_numbers_render_bare() {
        let filter = Filter::terms("variants.attributes.size", [38_i64, 40_i64]);
        assert_eq!(filter.to_string(), "variants.attributes.size:(38,40)");
    }

    #[test]
    fn test_range_with_both_bounds() {
        let filter = Filter::range("variants.price.centAmount", Some(100_i64), Some(200_i64));
        assert_eq!(filter.to_string(), "variants.price.centAmount:range(100 to 200)");
    }

    #[test]
    fn test_range_with_open_bounds() {
        let filter = Filter::range(
            "variants.price.centAmount",
            None::<FilterValue>,
            None::<FilterValue>,
        );
        assert_eq!(filter.to_string(), "variants.price.centAmount:range(* to *)");
    }

    #[test]
    fn test_exists_and_missing() {
        assert_eq!(
            Filter::exists("variants.attributes.sleeve").to_string(),
            "variants.attributes.sleeve:exists"
        );
        assert_eq!(
            Filter::missing("variants.attributes.sleeve").to_string(),
            "variants.attributes.sleeve:missing"
        );
    }

    #[test]
    fn test_boolean_term() {
        let filter = Filter::term("variants.attributes.organic", true);
        assert_eq!(filter.to_string(), "variants.attributes.organic:true");
    }

    #[test]
    fn test_facet_with_alias_and_product_counting() {
        let facet = Facet::of_path("variants.attributes.color")
            .with_alias("colors")
            .counting_products();
        assert_eq!(
            facet.to_string(),
            "variants.attributes.color as colors counting products"
        );
    }

    #[test]
    fn test_facet_over_range_filter() {
        let filter = Filter::range("variants.price.centAmount", Some(0_i64), Some(5000_i64));
        let facet = Facet::of_filter(&filter);
        assert_eq!(facet.to_string(), "variants.price.centAmount:range(0 to 5000)");
    }
}
