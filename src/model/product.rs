//! The product-projection resource returned by product search.
//!
//! Projections are read-only: they have no draft and no update actions, so
//! [`ProductProjection`] implements [`Resource`] alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LocalizedString, Money, Reference, Resource};

/// A searchable view of a product in either its current or staged form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductProjection {
    pub id: String,
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    pub product_type: Reference,
    pub name: LocalizedString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    pub slug: LocalizedString,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Reference>,
    pub master_variant: ProductVariant,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub has_staged_changes: bool,
}

impl Resource for ProductProjection {
    const ENDPOINT: &'static str = "product-projections";
    const NAME: &'static str = "ProductProjection";

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl ProductProjection {
    /// Returns the master variant followed by all other variants.
    pub fn all_variants(&self) -> impl Iterator<Item = &ProductVariant> {
        std::iter::once(&self.master_variant).chain(self.variants.iter())
    }
}

/// A sellable variation of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Sequential number within the product; the master variant is 1.
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<Price>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Set on search results when `mark_matching_variants` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_matching_variant: Option<bool>,
}

impl ProductVariant {
    /// Returns the attribute with the given name, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// A price scoped by optional country, customer group, and channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub value: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

/// A product attribute. Values are schema-driven, so the value stays a raw
/// JSON document; callers interpret it against the product type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_projection() -> ProductProjection {
        serde_json::from_value(json!({
            "id": "p1",
            "version": 7,
            "productType": {"typeId": "product-type", "id": "pt1"},
            "name": {"en": "Wooden spoon"},
            "slug": {"en": "wooden-spoon"},
            "masterVariant": {
                "id": 1,
                "sku": "SPOON-1",
                "attributes": [{"name": "material", "value": "beech"}]
            },
            "variants": [{"id": 2, "sku": "SPOON-2"}],
            "published": true
        }))
        .unwrap()
    }

    #[test]
    fn test_all_variants_starts_with_master() {
        let projection = sample_projection();
        let skus: Vec<_> = projection
            .all_variants()
            .filter_map(|v| v.sku.as_deref())
            .collect();
        assert_eq!(skus, vec!["SPOON-1", "SPOON-2"]);
    }

    #[test]
    fn test_attribute_lookup_by_name() {
        let projection = sample_projection();
        let material = projection.master_variant.attribute("material").unwrap();
        assert_eq!(material.value, json!("beech"));
        assert!(projection.master_variant.attribute("color").is_none());
    }

    #[test]
    fn test_absent_prices_deserialize_empty() {
        let projection = sample_projection();
        assert!(projection.master_variant.prices.is_empty());
        assert!(projection.master_variant.is_matching_variant.is_none());
    }
}
