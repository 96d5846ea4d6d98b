//! Value enum for dynamic field values

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Sort key of a [`Value`]; variant order is the cross-kind ranking.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Null,
    Bool(bool),
    Number(Decimal),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Text(String),
}

/// A dynamic value held by a record field.
///
/// Values coming from JSON map onto `Null`, `Bool`, `Int`, `Float`, `String`,
/// `List` and `Map`. `Decimal`, `Date` and `DateTime` are only produced by
/// code (for example a column transform); strings that look like dates stay
/// strings until a formatter parses them.
///
/// # Example
///
/// ```
/// use roster_lib::model::Value;
///
/// let name = Value::from("Somchai");
/// let amount = Value::from(1500i64);
/// assert!(Value::Null.is_blank());
/// assert!(Value::from("   ").is_blank());
/// assert!(!amount.is_blank());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/absent value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Nested object.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Default emptiness: null, blank-after-trim string, empty list or empty map.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Falsy values: null, `false`, zero, NaN and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Float(f) => *f == 0.0 || f.is_nan(),
            Value::Decimal(d) => d.is_zero(),
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of this value.
    ///
    /// Strings are parsed after trimming; non-numeric values yield `None`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Int(i) => Some(Decimal::from(*i)),
            Value::Float(f) => Decimal::try_from(*f).ok(),
            Value::Decimal(d) => Some(*d),
            Value::String(s) => Decimal::from_str(s.trim()).ok(),
            _ => None,
        }
    }

    /// Looks up a key in a map value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Plain-text rendering used as the default cell text.
    pub fn display(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::String(s) => s.clone(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::DateTime(dt) => dt.to_rfc3339(),
            Value::List(items) => items
                .iter()
                .map(Value::display)
                .collect::<Vec<_>>()
                .join(", "),
            Value::Map(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }

    /// Ordering used by the table engine when sorting rows.
    ///
    /// Values rank by kind first: null, bool, number, date, datetime, then
    /// text. Numbers (including numeric strings) compare numerically, dates
    /// chronologically and text case-insensitively. The ranking keeps the
    /// order total when a column mixes kinds.
    pub fn compare(&self, other: &Value) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    fn sort_key(&self) -> SortKey {
        match self {
            Value::Null => SortKey::Null,
            Value::Bool(b) => SortKey::Bool(*b),
            Value::Date(d) => SortKey::Date(*d),
            Value::DateTime(dt) => SortKey::DateTime(*dt),
            other => match other.as_decimal() {
                Some(n) => SortKey::Number(n),
                None => SortKey::Text(other.display().to_lowercase()),
            },
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from(serde_json::json!(42)), Value::Int(42));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
    }

    #[test]
    fn test_blank_vs_falsy() {
        assert!(Value::from(" ").is_blank());
        assert!(!Value::from(" ").is_falsy());
        assert!(Value::Int(0).is_falsy());
        assert!(!Value::Int(0).is_blank());
        assert!(Value::Map(BTreeMap::new()).is_blank());
    }

    #[test]
    fn test_as_decimal_parses_strings() {
        assert_eq!(Value::from(" 12.50 ").as_decimal(), Some(Decimal::new(1250, 2)));
        assert_eq!(Value::from("abc").as_decimal(), None);
    }

    #[test]
    fn test_compare_numbers_and_text() {
        assert_eq!(Value::Int(10).compare(&Value::Float(9.5)), Ordering::Greater);
        assert_eq!(Value::from("apple").compare(&Value::from("Banana")), Ordering::Less);
        assert_eq!(Value::Null.compare(&Value::Int(0)), Ordering::Less);
    }

    #[test]
    fn test_compare_mixed_kinds_is_consistent() {
        let nine = Value::Int(9);
        let ten = Value::Int(10);
        let five = Value::from("5");
        assert_eq!(nine.compare(&ten), Ordering::Less);
        assert_eq!(five.compare(&nine), Ordering::Less);
        assert_eq!(five.compare(&ten), Ordering::Less);
        assert_eq!(Value::Int(3).compare(&Value::from("abc")), Ordering::Less);
        assert_eq!(Value::Float(f64::NAN).compare(&Value::Int(1)), Ordering::Greater);
    }
}
