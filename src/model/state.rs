//! The state resource used to build finite workflows (order states,
//! review states, and so on), plus its draft and update actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Creatable, KeyIdentifiable, LocalizedString, Reference, Resource, Updatable};

/// Which workflow a state belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StateType {
    OrderState,
    LineItemState,
    ProductState,
    ReviewState,
    PaymentState,
}

/// Extra behavior a state opts into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StateRole {
    ReviewIncludedInStatistics,
    Return,
}

/// A node in a workflow state machine.
///
/// `transitions` of `None` means any state is reachable from this one; an
/// empty list means the state is final. The distinction matters, so the
/// field stays an `Option<Vec<_>>` rather than defaulting to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: String,
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    /// Unique identifier within the workflow, user-assigned.
    pub key: String,
    #[serde(rename = "type")]
    pub r#type: StateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    /// Whether new resources of the workflow start in this state.
    #[serde(default)]
    pub initial: bool,
    /// Whether the state is predefined by the platform.
    #[serde(default)]
    pub built_in: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<StateRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Vec<Reference>>,
}

impl Resource for State {
    const ENDPOINT: &'static str = "states";
    const NAME: &'static str = "State";

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Creatable for State {
    type Draft = StateDraft;
}

impl Updatable for State {
    type UpdateAction = StateUpdateAction;
}

impl KeyIdentifiable for State {}

/// Creation payload for a state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StateDraft {
    pub key: String,
    #[serde(rename = "type")]
    pub r#type: StateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<StateRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Vec<Reference>>,
}

impl StateDraft {
    /// Creates a draft for a state of the given workflow type.
    #[must_use]
    pub fn of_key_and_type(key: impl Into<String>, r#type: StateType) -> Self {
        Self {
            key: key.into(),
            r#type,
            name: None,
            description: None,
            initial: None,
            roles: Vec::new(),
            transitions: None,
        }
    }
}

/// The state update-action union.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "action",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum StateUpdateAction {
    ChangeKey {
        key: String,
    },
    ChangeType {
        #[serde(rename = "type")]
        r#type: StateType,
    },
    SetName {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<LocalizedString>,
    },
    SetDescription {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<LocalizedString>,
    },
    ChangeInitial {
        initial: bool,
    },
    SetRoles {
        roles: Vec<StateRole>,
    },
    AddRoles {
        roles: Vec<StateRole>,
    },
    RemoveRoles {
        roles: Vec<StateRole>,
    },
    SetTransitions {
        #[serde(skip_serializing_if = "Option::is_none")]
        transitions: Option<Vec<Reference>>,
    },
}
