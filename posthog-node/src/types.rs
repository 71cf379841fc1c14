//! Core domain types for the PostHog node
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Event** | One analytics occurrence sent to `/capture` |
//! | **Distinct ID** | Identifier of the subject an event is attributed to |
//! | **Property** | A user-defined key/value datum attached to an event |
//! | **Additional Fields** | Optional top-level event attributes (currently `timestamp`), distinct from properties |

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Selectors
// ============================================

/// API resource the node operates on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Analytics events pushed to `/capture`
    #[default]
    Event,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Event => "event",
        }
    }
}

/// Operation applied to the selected resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Capture a new event
    #[default]
    Create,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
        }
    }
}

// ============================================
// Properties
// ============================================

/// A user-supplied property value.
///
/// Stays close to what the host's expression engine produces: scalars
/// only, no nested collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Date(DateTime<Utc>),
    String(String),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value as f64)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        PropertyValue::Date(value)
    }
}

/// One `{key, value}` row from the node's repeatable property collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub key: String,
    pub value: PropertyValue,
}

impl PropertyEntry {
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Property mapping sent with an event.
///
/// Keys are unique; inserting an existing key overwrites its value, so the
/// last row bearing a key wins. Key order is deterministic for stable
/// serialization.
pub type Properties = BTreeMap<String, PropertyValue>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_selector_wire_form() {
        assert_eq!(serde_json::to_string(&Resource::Event).unwrap(), r#""event""#);
        assert_eq!(
            serde_json::to_string(&Operation::Create).unwrap(),
            r#""create""#
        );
        assert_eq!(Resource::default().as_str(), "event");
        assert_eq!(Operation::default().as_str(), "create");
    }

    #[test]
    fn test_property_value_serialization() {
        assert_eq!(
            serde_json::to_string(&PropertyValue::from("pro")).unwrap(),
            r#""pro""#
        );
        assert_eq!(serde_json::to_string(&PropertyValue::from(2.5)).unwrap(), "2.5");
        assert_eq!(
            serde_json::to_string(&PropertyValue::from(true)).unwrap(),
            "true"
        );

        let date = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let json = serde_json::to_string(&PropertyValue::from(date)).unwrap();
        assert!(json.starts_with(r#""2024-03-05T10:00:00"#));
    }

    #[test]
    fn test_property_value_deserialization() {
        let value: PropertyValue = serde_json::from_str("false").unwrap();
        assert_eq!(value, PropertyValue::Bool(false));

        let value: PropertyValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, PropertyValue::Number(42.0));

        let value: PropertyValue = serde_json::from_str(r#""2024-03-05T10:00:00Z""#).unwrap();
        assert!(matches!(value, PropertyValue::Date(_)));

        let value: PropertyValue = serde_json::from_str(r#""plain text""#).unwrap();
        assert_eq!(value, PropertyValue::String("plain text".to_string()));
    }

    #[test]
    fn test_properties_last_write_wins() {
        let mut properties = Properties::new();
        properties.insert("plan".to_string(), PropertyValue::from("free"));
        properties.insert("plan".to_string(), PropertyValue::from("pro"));

        assert_eq!(properties.len(), 1);
        assert_eq!(properties["plan"], PropertyValue::from("pro"));
    }
}
