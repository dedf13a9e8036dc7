//! Common value types shared by all resources.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A string localized per language tag.
///
/// Serializes as a JSON object keyed by language tag:
/// `{"en": "Wooden spoon", "de": "Holzlöffel"}`. Uses a `BTreeMap` so
/// serialized output is stable across runs.
///
/// # Example
///
/// ```rust
/// use commerce_api::model::LocalizedString;
///
/// let name = LocalizedString::of("en", "Wooden spoon").with("de", "Holzlöffel");
/// assert_eq!(name.get("de"), Some("Holzlöffel"));
/// assert_eq!(name.get("fr"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct LocalizedString(BTreeMap<String, String>);

impl LocalizedString {
    /// Creates a localized string with one initial translation.
    #[must_use]
    pub fn of(lang: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(lang.into(), value.into());
        Self(map)
    }

    /// Adds or replaces the translation for `lang`, returning the value.
    #[must_use]
    pub fn with(mut self, lang: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(lang.into(), value.into());
        self
    }

    /// Returns the translation for `lang`, if present.
    #[must_use]
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    /// Returns `true` if no translations are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A reference to another resource by type and id.
///
/// Serializes as `{"typeId": "cart-discount", "id": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// The referenced resource type (e.g. `"customer-group"`).
    pub type_id: String,
    /// The referenced resource id.
    pub id: String,
}

impl Reference {
    /// Creates a reference to the resource of `type_id` with the given id.
    #[must_use]
    pub fn of(type_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            id: id.into(),
        }
    }
}

/// A reference to a store by its key.
///
/// Stores are addressed by key rather than id throughout the API;
/// serializes as `{"typeId": "store", "key": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreKeyReference {
    /// Always `"store"`.
    pub type_id: String,
    /// The store key.
    pub key: String,
}

impl StoreKeyReference {
    /// Creates a store reference for the given key.
    #[must_use]
    pub fn of(key: impl Into<String>) -> Self {
        Self {
            type_id: "store".to_string(),
            key: key.into(),
        }
    }
}

/// A postal address.
///
/// All fields are optional except `country`; the server validates the
/// combination, not the client.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Server-assigned id within the owning resource's address list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Two-letter country code.
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Address {
    /// Creates an address for the given two-letter country code.
    #[must_use]
    pub fn of_country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }
}

/// A monetary amount in cents of a currency.
///
/// Serializes as `{"currencyCode": "EUR", "centAmount": 4200}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Amount in the smallest unit of the currency.
    pub cent_amount: i64,
}

impl Money {
    /// Creates a monetary amount in cents of the given currency.
    #[must_use]
    pub fn of(currency_code: impl Into<String>, cent_amount: i64) -> Self {
        Self {
            currency_code: currency_code.into(),
            cent_amount,
        }
    }
}

/// A dynamic custom-field value with an explicit type tag.
///
/// Custom fields can hold values of arbitrary type; the tagged union makes
/// the type explicit in serialized form instead of relying on JSON value
/// shape alone:
///
/// ```json
/// {"type": "string", "value": "coupon"}
/// {"type": "reference", "value": {"typeId": "customer", "id": "..."}}
/// {"type": "set", "value": [{"type": "number", "value": 1}]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum TypedValue {
    /// A text value.
    String(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Boolean(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// A point in time.
    DateTime(DateTime<Utc>),
    /// A reference to another resource.
    Reference(Reference),
    /// A homogeneous set of values.
    Set(Vec<TypedValue>),
}

/// Custom fields attached to a resource: the defining type plus the values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomFields {
    /// Reference to the type defining the allowed fields.
    #[serde(rename = "type")]
    pub r#type: Reference,
    /// Field name to value.
    #[serde(default)]
    pub fields: BTreeMap<String, TypedValue>,
}
