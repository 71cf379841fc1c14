//! Declarative node metadata
//!
//! Hosts render the node's parameter surface from this descriptor; the
//! executor never reads it. Serialized field names use the host's camelCase
//! wire form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Top-level description of the node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub display_name: String,
    pub name: String,
    pub group: Vec<String>,
    pub version: u32,
    pub description: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    /// Credential types the host must resolve before execution
    pub credentials: Vec<CredentialSpec>,
    pub properties: Vec<ParameterSpec>,
}

/// A credential requirement declared by the node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialSpec {
    pub name: String,
    pub required: bool,
}

/// Rendering type of a declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKind {
    /// Single choice from a fixed option list
    Options,
    String,
    DateTime,
    /// Repeatable group of sub-fields
    FixedCollection,
    /// Optional named fields added on demand
    Collection,
}

/// One choice of an `Options` parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
    pub value: String,
}

impl SelectOption {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Conditions controlling when a parameter is shown.
///
/// The parameter is visible only when every listed parameter currently has
/// one of its listed values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default)]
    pub show: BTreeMap<String, Vec<Value>>,
}

/// One declared parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub default: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
    /// Choices for `Options` parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Sub-parameters for the collection kinds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<ParameterSpec>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub multiple_values: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn param(display_name: &str, name: &str, kind: ParameterKind) -> ParameterSpec {
    ParameterSpec {
        display_name: display_name.to_string(),
        name: name.to_string(),
        kind,
        default: Value::Null,
        description: None,
        placeholder: None,
        display_options: None,
        options: Vec::new(),
        values: Vec::new(),
        multiple_values: false,
    }
}

fn shown_when(pairs: &[(&str, &[&str])]) -> Option<DisplayOptions> {
    let mut show = BTreeMap::new();
    for (name, values) in pairs {
        show.insert(
            name.to_string(),
            values.iter().map(|v| Value::from(*v)).collect(),
        );
    }
    Some(DisplayOptions { show })
}

/// The PostHog node's declared surface
pub fn descriptor() -> NodeDescriptor {
    let for_event: &[(&str, &[&str])] = &[("resource", &["event"])];
    let for_event_create: &[(&str, &[&str])] =
        &[("resource", &["event"]), ("operation", &["create"])];

    let mut resource = param("Resource", "resource", ParameterKind::Options);
    resource.default = json!("event");
    resource.description = Some("The resource to operate on".to_string());
    resource.options = vec![SelectOption::new("Event", "event")];

    let mut operation = param("Operation", "operation", ParameterKind::Options);
    operation.default = json!("create");
    operation.description = Some("The operation to perform".to_string());
    operation.display_options = shown_when(for_event);
    operation.options = vec![SelectOption::new("Create", "create")];

    let mut event_name = param("Event Name", "eventName", ParameterKind::String);
    event_name.default = json!("");
    event_name.description = Some("The name of the event".to_string());
    event_name.display_options = shown_when(for_event_create);

    let mut distinct_id = param("Distinct ID", "distinctId", ParameterKind::String);
    distinct_id.default = json!("");
    distinct_id.description = Some("User's distinct ID".to_string());
    distinct_id.display_options = shown_when(for_event_create);

    let mut property_key = param("Key", "key", ParameterKind::String);
    property_key.default = json!("");
    let mut property_value = param("Value", "value", ParameterKind::String);
    property_value.default = json!("");

    let mut properties_ui = param("Properties", "propertiesUi", ParameterKind::FixedCollection);
    properties_ui.default = json!({});
    properties_ui.placeholder = Some("Add Property".to_string());
    properties_ui.display_options = shown_when(for_event_create);
    properties_ui.values = vec![property_key, property_value];
    properties_ui.multiple_values = true;

    let mut timestamp = param("Timestamp", "timestamp", ParameterKind::DateTime);
    timestamp.default = json!("");
    timestamp.description = Some("Timestamp of the event".to_string());

    let mut additional_fields = param(
        "Additional Fields",
        "additionalFields",
        ParameterKind::Collection,
    );
    additional_fields.default = json!({});
    additional_fields.placeholder = Some("Add Field".to_string());
    additional_fields.display_options = shown_when(for_event_create);
    additional_fields.values = vec![timestamp];

    NodeDescriptor {
        display_name: "PostHog".to_string(),
        name: "postHog".to_string(),
        group: vec!["input".to_string()],
        version: 1,
        description: "Consume PostHog API".to_string(),
        inputs: vec!["main".to_string()],
        outputs: vec!["main".to_string()],
        credentials: vec![CredentialSpec {
            name: "postHogApi".to_string(),
            required: true,
        }],
        properties: vec![
            resource,
            operation,
            event_name,
            distinct_id,
            properties_ui,
            additional_fields,
        ],
    }
}
