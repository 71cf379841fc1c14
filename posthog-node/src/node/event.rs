//! Event payload assembly
//!
//! Builds the `/capture` body for one input item. Property rows reduce into
//! a mapping with last-write-wins semantics, `distinct_id` always comes from
//! the dedicated parameter, and the optional timestamp is normalized to an
//! ISO-8601 UTC string before it enters the payload.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::node::context::ItemParameters;
use crate::types::{Properties, PropertyValue};

/// One analytics occurrence, shaped for the `/capture` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    /// Event name
    pub event: String,

    /// User-defined properties plus the mandatory `distinct_id`
    pub properties: Properties,

    /// ISO-8601 timestamp, only serialized when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Event {
    /// Assemble the payload for one input item.
    ///
    /// Later property rows overwrite earlier rows with the same key, and the
    /// `distinct_id` parameter overwrites any user row named `distinct_id`.
    pub fn from_parameters(params: &ItemParameters) -> Result<Self> {
        let mut properties = Properties::new();
        for entry in &params.properties {
            properties.insert(entry.key.clone(), entry.value.clone());
        }
        properties.insert(
            "distinct_id".to_string(),
            PropertyValue::String(params.distinct_id.clone()),
        );

        let timestamp = match params.additional_fields.timestamp.as_deref() {
            Some(raw) => Some(normalize_timestamp(raw)?),
            None => None,
        };

        Ok(Event {
            event: params.event_name.clone(),
            properties,
            timestamp,
        })
    }

    /// The payload as a JSON object, ready for the API client's body slot
    pub fn into_body(self) -> Result<Map<String, Value>> {
        let mut body = Map::new();
        body.insert("event".to_string(), Value::String(self.event));
        body.insert(
            "properties".to_string(),
            serde_json::to_value(&self.properties)?,
        );
        if let Some(timestamp) = self.timestamp {
            body.insert("timestamp".to_string(), Value::String(timestamp));
        }
        Ok(body)
    }
}

/// Normalize a user-supplied timestamp to ISO-8601 UTC with millisecond
/// precision. Values without an offset are interpreted as UTC.
fn normalize_timestamp(raw: &str) -> Result<String> {
    let parsed = parse_timestamp(raw).map_err(|source| Error::Timestamp {
        value: raw.to_string(),
        source,
    })?;
    Ok(parsed.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
