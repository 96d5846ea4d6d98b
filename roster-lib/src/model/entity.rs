//! Minimal entity shape shared by every generic component.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// Identifier of an entity: numeric primary keys or string keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        RecordId::Int(id as i64)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Str(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId::Str(id)
    }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Int(id) => Value::Int(id),
            RecordId::Str(id) => Value::String(id),
        }
    }
}

/// Anything that can be shown as a table row or acted on by CRUD operations.
///
/// The only hard requirement is a unique id; every other field is looked up
/// by name. The trait is object safe so renderers can take `&dyn Entity`.
///
/// # Example
///
/// ```
/// use roster_lib::model::{Entity, RecordId, Value};
///
/// struct Payment {
///     id: i64,
///     amount: f64,
/// }
///
/// impl Entity for Payment {
///     fn id(&self) -> RecordId {
///         RecordId::Int(self.id)
///     }
///
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => Some(Value::Int(self.id)),
///             "amount" => Some(Value::Float(self.amount)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Entity: Send + Sync {
    /// Unique identifier of this entity.
    fn id(&self) -> RecordId;

    /// Value of a top-level field, or `None` if the entity has no such field.
    fn field(&self, name: &str) -> Option<Value>;
}
