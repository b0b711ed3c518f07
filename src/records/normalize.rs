//! Change record normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upstream fields kept by normalization.
pub const ALLOWED_FIELDS: [&str; 7] = [
    "number",
    "active",
    "priority",
    "description",
    "work_start",
    "work_end",
    "sys_id",
];

/// The stable record shape handed to the host.
///
/// `number` becomes `change_ticket_number` and `sys_id` becomes
/// `change_ticket_key`. Fields missing upstream stay `None` and are left out
/// of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedChangeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_ticket_number: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_start: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_end: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_ticket_key: Option<Value>,
}

impl NormalizedChangeRecord {
    /// Keep the allow-listed fields of a raw record, renaming two of them.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut record = Self::default();
        for (key, value) in raw {
            let slot = match key.as_str() {
                "number" => &mut record.change_ticket_number,
                "active" => &mut record.active,
                "priority" => &mut record.priority,
                "description" => &mut record.description,
                "work_start" => &mut record.work_start,
                "work_end" => &mut record.work_end,
                "sys_id" => &mut record.change_ticket_key,
                _ => continue,
            };
            *slot = Some(value.clone());
        }
        record
    }

    /// Normalize any JSON value. Non-objects carry no fields.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(raw) => Self::from_raw(raw),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
