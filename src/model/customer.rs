//! The customer resource, its draft, and its update actions.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Address, Creatable, CustomFields, KeyIdentifiable, Reference, Resource, StoreKeyReference,
    TypedValue, Updatable,
};

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    /// Secondary unique identifier, user-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_shipping_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_billing_address_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_address_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub billing_address_ids: Vec<String>,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stores: Vec<StoreKeyReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFields>,
}

impl Resource for Customer {
    const ENDPOINT: &'static str = "customers";
    const NAME: &'static str = "Customer";

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Creatable for Customer {
    type Draft = CustomerDraft;
}

impl Updatable for Customer {
    type UpdateAction = CustomerUpdateAction;
}

impl KeyIdentifiable for Customer {}

/// Creation payload for a customer. Only `email` is required.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    /// Index into `addresses` for the default shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_shipping_address: Option<usize>,
    /// Index into `addresses` for the default billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_billing_address: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stores: Vec<StoreKeyReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFields>,
}

impl CustomerDraft {
    /// Creates a draft with the given email and all other fields unset.
    #[must_use]
    pub fn of_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }
}

/// The customer update-action union.
///
/// Each variant serializes as `{"action": "<tag>", ...fields}` with the tag
/// in camelCase; optional fields are omitted entirely when `None`, which is
/// how unset is expressed on the wire (an explicit `null` is never sent).
///
/// # Example
///
/// ```rust
/// use commerce_api::model::CustomerUpdateAction;
///
/// let action = CustomerUpdateAction::SetFirstName {
///     first_name: Some("Jane".to_string()),
/// };
/// let json = serde_json::to_value(&action).unwrap();
/// assert_eq!(json, serde_json::json!({"action": "setFirstName", "firstName": "Jane"}));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "action",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum CustomerUpdateAction {
    ChangeEmail {
        email: String,
    },
    SetFirstName {
        #[serde(skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
    },
    SetLastName {
        #[serde(skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
    },
    SetMiddleName {
        #[serde(skip_serializing_if = "Option::is_none")]
        middle_name: Option<String>,
    },
    SetTitle {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    SetSalutation {
        #[serde(skip_serializing_if = "Option::is_none")]
        salutation: Option<String>,
    },
    SetCustomerNumber {
        #[serde(skip_serializing_if = "Option::is_none")]
        customer_number: Option<String>,
    },
    SetExternalId {
        #[serde(skip_serializing_if = "Option::is_none")]
        external_id: Option<String>,
    },
    SetCompanyName {
        #[serde(skip_serializing_if = "Option::is_none")]
        company_name: Option<String>,
    },
    SetDateOfBirth {
        #[serde(skip_serializing_if = "Option::is_none")]
        date_of_birth: Option<NaiveDate>,
    },
    SetVatId {
        #[serde(skip_serializing_if = "Option::is_none")]
        vat_id: Option<String>,
    },
    SetLocale {
        #[serde(skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },
    SetKey {
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
    AddAddress {
        address: Address,
    },
    ChangeAddress {
        address_id: String,
        address: Address,
    },
    RemoveAddress {
        address_id: String,
    },
    SetDefaultShippingAddress {
        #[serde(skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
    },
    SetDefaultBillingAddress {
        #[serde(skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
    },
    AddShippingAddressId {
        address_id: String,
    },
    RemoveShippingAddressId {
        address_id: String,
    },
    AddBillingAddressId {
        address_id: String,
    },
    RemoveBillingAddressId {
        address_id: String,
    },
    SetCustomerGroup {
        #[serde(skip_serializing_if = "Option::is_none")]
        customer_group: Option<Reference>,
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
    AddStore {
        store: StoreKeyReference,
    },
    RemoveStore {
        store: StoreKeyReference,
    },
    SetStores {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        stores: Vec<StoreKeyReference>,
    },
}
