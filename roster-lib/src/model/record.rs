//! Dynamic entity record

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::Utc;

use super::Entity;
use super::RecordId;
use super::Value;
use crate::error::RecordError;
use crate::format::parse_datetime;

/// A schemaless entity record: an id plus named field values.
///
/// # Example
///
/// ```
/// use roster_lib::model::{Entity, Record, Value};
///
/// let record = Record::new(1)
///     .set("first_name", "Somchai")
///     .set("amount", 1500i64);
///
/// assert_eq!(record.get("first_name"), Some(&Value::from("Somchai")));
/// assert_eq!(record.id().to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a new empty record with the given id.
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builds a record from a JSON object with a mandatory `id` member.
    pub fn from_json(json: serde_json::Value) -> Result<Self, RecordError> {
        let serde_json::Value::Object(map) = json else {
            return Err(RecordError::NotAnObject {
                actual: Value::from(json).type_name(),
            });
        };

        let id = match map.get("id") {
            None | Some(serde_json::Value::Null) => return Err(RecordError::MissingId),
            Some(serde_json::Value::Number(n)) => match n.as_i64() {
                Some(id) => RecordId::Int(id),
                None => return Err(RecordError::InvalidId { actual: "float" }),
            },
            Some(serde_json::Value::String(s)) => RecordId::Str(s.clone()),
            Some(other) => {
                return Err(RecordError::InvalidId {
                    actual: Value::from(other.clone()).type_name(),
                });
            }
        };

        let fields = map
            .into_iter()
            .filter(|(key, _)| key != "id")
            .map(|(key, value)| (key, Value::from(value)))
            .collect();

        Ok(Self { id, fields })
    }

    /// Builds records from a JSON array of objects.
    pub fn many_from_json(json: serde_json::Value) -> Result<Vec<Self>, RecordError> {
        match json {
            serde_json::Value::Array(items) => items.into_iter().map(Self::from_json).collect(),
            other => Err(RecordError::NotAnObject {
                actual: Value::from(other).type_name(),
            }),
        }
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields (excluding `id`).
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Sets a field value, consuming and returning the record.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Creation timestamp, if present and parseable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("created_at")
    }

    /// Last update timestamp, if present and parseable.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("updated_at")
    }

    fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(field)? {
            Value::DateTime(dt) => Some(*dt),
            Value::String(s) => parse_datetime(s),
            _ => None,
        }
    }
}

impl Entity for Record {
    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        if name == "id" {
            return Some(self.id.clone().into());
        }
        self.fields.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_requires_id() {
        let err = Record::from_json(serde_json::json!({ "name": "x" })).unwrap_err();
        assert!(matches!(err, RecordError::MissingId));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Record::from_json(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, RecordError::NotAnObject { actual: "list" }));
    }

    #[test]
    fn test_string_and_numeric_ids() {
        let a = Record::from_json(serde_json::json!({ "id": 3 })).unwrap();
        let b = Record::from_json(serde_json::json!({ "id": "P-001" })).unwrap();
        assert_eq!(a.id(), RecordId::Int(3));
        assert_eq!(b.id(), RecordId::Str("P-001".into()));
        assert_eq!(b.field("id"), Some(Value::from("P-001")));
    }

    #[test]
    fn test_timestamps() {
        let record = Record::from_json(serde_json::json!({
            "id": 1,
            "created_at": "2024-03-01T08:30:00Z",
            "updated_at": "garbage"
        }))
        .unwrap();
        assert!(record.created_at().is_some());
        assert!(record.updated_at().is_none());
    }
}
