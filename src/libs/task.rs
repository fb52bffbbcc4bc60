use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Qualitative urgency label carried by every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Maps a stored value onto the enum. Anything missing or unrecognized
    /// reads back as `Low`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("medium") => Priority::Medium,
            Some("high") => Priority::High,
            _ => Priority::Low,
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => Priority::parse(Some(&s)),
            _ => Priority::Low,
        })
    }
}

/// A single to-do item as stored and served by the API.
///
/// `created_at` is supplied by the client at creation time and never touched
/// afterwards; `date` is the user-chosen target date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub date: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub priority: Priority,
    pub completed: bool,
}

/// Creation payload for `POST /api/tasks`.
///
/// `text` stays optional here so that a missing value reaches the store and
/// surfaces as its NOT NULL violation rather than as a body parse failure;
/// clients see the store's message either way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTask {
    pub text: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub priority: Option<Priority>,
}

/// Partial update payload for `PATCH /api/tasks/{id}`.
///
/// Each recognized field distinguishes three states: absent (left alone),
/// present-null (column set to NULL), and present-value. `completed` accepts
/// any JSON value and is read for truthiness the way the UI sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default, deserialize_with = "field_present")]
    pub text: Option<Option<String>>,
    #[serde(default, deserialize_with = "field_present")]
    pub date: Option<Option<String>>,
    #[serde(default, deserialize_with = "field_present")]
    pub priority: Option<Option<Priority>>,
    #[serde(default, deserialize_with = "completed_flag")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// True when no recognized field was present in the request body.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.date.is_none() && self.priority.is_none() && self.completed.is_none()
    }
}

/// Wraps a deserialized value in `Some` so the outer `Option` tracks field
/// presence and the inner one tracks explicit nulls.
fn field_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

fn completed_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(Some(truthy(&value)))
}

/// JavaScript-style truthiness for the `completed` flag.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
