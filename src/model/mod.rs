//! Resource models for the commerce API.
//!
//! This module defines the [`Resource`] trait family, the common value types
//! shared by all resources (localized strings, references, money, typed
//! custom-field values), and the concrete resource models:
//!
//! - [`Customer`] with [`CustomerDraft`] and [`CustomerUpdateAction`]
//! - [`DiscountCode`] with [`DiscountCodeDraft`] and [`DiscountCodeUpdateAction`]
//! - [`State`] with [`StateDraft`] and [`StateUpdateAction`]
//! - [`ProductProjection`] (read-only search target)
//!
//! Resources are plain serde-derived records; the request builders in
//! [`crate::request`] are generic over the traits defined here, so adding a
//! resource means adding a model file and three small trait impls.

mod common;
mod customer;
mod discount_code;
mod product;
mod state;

pub use common::{
    Address, CustomFields, LocalizedString, Money, Reference, StoreKeyReference, TypedValue,
};
pub use customer::{Customer, CustomerDraft, CustomerUpdateAction};
pub use discount_code::{DiscountCode, DiscountCodeDraft, DiscountCodeUpdateAction};
pub use product::{Attribute, Price, ProductProjection, ProductVariant};
pub use state::{State, StateDraft, StateRole, StateType, StateUpdateAction};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A server-side resource with identity and optimistic-concurrency version.
///
/// Every resource is identified by an opaque `id` and carries a `version`
/// assigned by the server. Mutating requests must submit the last observed
/// version; the server rejects mismatches with a 409 — the client never
/// enforces this locally.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The collection endpoint segment (e.g. `"customers"`).
    const ENDPOINT: &'static str;

    /// The singular resource name used in messages (e.g. `"Customer"`).
    const NAME: &'static str;

    /// Returns the resource's opaque identifier.
    fn id(&self) -> &str;

    /// Returns the server-assigned version of this representation.
    fn version(&self) -> u64;
}

/// A resource that can be created from a draft.
///
/// A draft is the creation payload: the resource's logical fields minus
/// everything the server assigns (id, version, timestamps).
pub trait Creatable: Resource {
    /// The draft payload POSTed to the collection endpoint.
    type Draft: Serialize + Clone + std::fmt::Debug + Send + Sync;
}

/// A resource that supports update actions.
pub trait Updatable: Resource {
    /// The update-action union for this resource; serializes to
    /// `{"action": <tag>, ...fields}`.
    type UpdateAction: Serialize + Clone + std::fmt::Debug + Send + Sync;
}

/// Marker for resources addressable by a secondary unique `key`
/// (`{endpoint}/key={key}` URLs) in addition to their id.
pub trait KeyIdentifiable: Resource {}
