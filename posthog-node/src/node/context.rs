//! Execution context handed to the node by the host
//!
//! The host's parameter-resolution layer and credential store live outside
//! this crate; what arrives here are the resolved, typed values for one
//! execution. Selectors are resolved once per execution, matching the host
//! contract of evaluating them per node rather than per item.

use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::types::{Operation, PropertyEntry, Resource};

/// Optional top-level event attributes, distinct from `properties`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalFields {
    /// Timestamp of the event, as entered in the host UI. Normalized to an
    /// ISO-8601 UTC string before the payload is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Resolved parameters for a single input item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemParameters {
    /// The name of the event
    pub event_name: String,

    /// The subject the event is attributed to
    pub distinct_id: String,

    /// Repeatable `{key, value}` property rows, in declaration order
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,

    /// Optional top-level fields
    #[serde(default)]
    pub additional_fields: AdditionalFields,
}

/// Everything one node execution needs from the host
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    credentials: Credentials,
    resource: Resource,
    operation: Operation,
    items: Vec<ItemParameters>,
}

impl ExecutionContext {
    /// Build a context with the default `event` / `create` selectors
    pub fn new(credentials: Credentials, items: Vec<ItemParameters>) -> Self {
        Self::with_selectors(
            credentials,
            Resource::default(),
            Operation::default(),
            items,
        )
    }

    /// Build a context with explicit selectors
    pub fn with_selectors(
        credentials: Credentials,
        resource: Resource,
        operation: Operation,
        items: Vec<ItemParameters>,
    ) -> Self {
        Self {
            credentials,
            resource,
            operation,
            items,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Input items for this execution, in host order
    pub fn items(&self) -> &[ItemParameters] {
        &self.items
    }

    /// Number of input items in this execution
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
