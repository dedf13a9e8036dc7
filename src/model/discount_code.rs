//! The discount-code resource, its draft, and its update actions.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Creatable, CustomFields, LocalizedString, Reference, Resource, TypedValue, Updatable,
};

/// A code customers can enter to claim cart discounts.
///
/// Discount codes are addressable by id only; they carry no secondary key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    pub id: String,
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    /// The string customers enter at checkout.
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    /// The cart discounts this code activates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cart_discounts: Vec<Reference>,
    /// Cart predicate limiting where the code applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_predicate: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_applications: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_applications_per_customer: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFields>,
}

impl Resource for DiscountCode {
    const ENDPOINT: &'static str = "discount-codes";
    const NAME: &'static str = "DiscountCode";

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Creatable for DiscountCode {
    type Draft = DiscountCodeDraft;
}

impl Updatable for DiscountCode {
    type UpdateAction = DiscountCodeUpdateAction;
}

/// Creation payload for a discount code.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCodeDraft {
    pub code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cart_discounts: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_predicate: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_applications: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_applications_per_customer: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFields>,
}

impl DiscountCodeDraft {
    /// Creates a draft activating `cart_discounts` for the given code.
    #[must_use]
    pub fn of_code(code: impl Into<String>, cart_discounts: Vec<Reference>) -> Self {
        Self {
            code: code.into(),
            cart_discounts,
            ..Self::default()
        }
    }
}

/// The discount-code update-action union.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "action",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum DiscountCodeUpdateAction {
    SetName {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<LocalizedString>,
    },
    SetDescription {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<LocalizedString>,
    },
    SetCartPredicate {
        #[serde(skip_serializing_if = "Option::is_none")]
        cart_predicate: Option<String>,
    },
    ChangeCartDiscounts {
        cart_discounts: Vec<Reference>,
    },
    ChangeIsActive {
        is_active: bool,
    },
    SetMaxApplications {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_applications: Option<u64>,
    },
    SetMaxApplicationsPerCustomer {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_applications_per_customer: Option<u64>,
    },
    SetValidFrom {
        #[serde(skip_serializing_if = "Option::is_none")]
        valid_from: Option<DateTime<Utc>>,
    },
    SetValidUntil {
        #[serde(skip_serializing_if = "Option::is_none")]
        valid_until: Option<DateTime<Utc>>,
    },
    SetValidFromAndUntil {
        #[serde(skip_serializing_if = "Option::is_none")]
        valid_from: Option<DateTime<Utc>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        valid_until: Option<DateTime<Utc>>,
    },
    ChangeGroups {
        groups: Vec<String>,
    },
    SetCustomType {
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        r#type: Option<Reference>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<BTreeMap<String, TypedValue>>,
    },
    SetCustomField {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<TypedValue>,
    },
}
