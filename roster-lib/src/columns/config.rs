//! Column configuration: one tagged variant per column kind.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::{Cell, RowAction};
use crate::error::ColumnError;
use crate::model::{Entity, Value};

/// All recognised values of the `type` discriminant.
pub const COLUMN_TYPES: [&str; 7] = ["expand", "id", "text", "date", "number", "status", "action"];

/// Default style class for statuses missing from the status map.
pub const DEFAULT_STATUS_CLASS: &str = "status-default";

fn default_true() -> bool {
    true
}

fn default_id_header() -> String {
    "ID".to_string()
}

fn default_actions_header() -> String {
    "Actions".to_string()
}

/// Transform applied to a text column value before display.
#[derive(Clone)]
pub struct ValueTransform(pub Arc<dyn Fn(&Value) -> Value + Send + Sync>);

impl ValueTransform {
    /// Wraps a transform function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Applies the transform.
    pub fn apply(&self, value: &Value) -> Value {
        (self.0)(value)
    }
}

impl fmt::Debug for ValueTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueTransform(..)")
    }
}

/// Caller-supplied renderer for an action column.
#[derive(Clone)]
pub struct RowRenderer(pub Arc<dyn Fn(&dyn Entity) -> Cell + Send + Sync>);

impl RowRenderer {
    /// Wraps a renderer function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&dyn Entity) -> Cell + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Renders a row.
    pub fn render(&self, row: &dyn Entity) -> Cell {
        (self.0)(row)
    }
}

impl fmt::Debug for RowRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowRenderer(..)")
    }
}

/// Row expander column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandColumn {
    #[serde(default)]
    pub header: String,
}

/// Identifier column, rendered monospace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdColumn {
    pub key: String,
    #[serde(default = "default_id_header")]
    pub header: String,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}

/// Free text column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColumn {
    /// Dotted path to the value (`"address.province"`).
    pub key: String,
    pub header: String,
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Truncate longer text with `...`.
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(skip)]
    pub transform: Option<ValueTransform>,
}

/// Date or date-time column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateColumn {
    pub key: String,
    pub header: String,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default)]
    pub include_time: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}

/// Number or currency column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberColumn {
    pub key: String,
    pub header: String,
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Format as currency instead of a plain decimal.
    #[serde(default)]
    pub currency: bool,
    /// Currency code overriding the global one.
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Fraction digits for plain decimals. Default: 2.
    #[serde(default)]
    pub precision: Option<u32>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}

/// Label and style of one status value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStyle {
    pub label: String,
    #[serde(default)]
    pub class_name: Option<String>,
}

/// Status badge column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusColumn {
    pub key: String,
    pub header: String,
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Raw status value → label and style.
    #[serde(default)]
    pub statuses: BTreeMap<String, StatusStyle>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}

/// Row actions column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionColumn {
    #[serde(default = "default_actions_header")]
    pub header: String,
    /// Offered actions. Default: view, edit, delete.
    #[serde(default = "RowAction::defaults")]
    pub actions: Vec<RowAction>,
    #[serde(default)]
    pub hideable: bool,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(skip)]
    pub render: Option<RowRenderer>,
}

impl Default for ActionColumn {
    fn default() -> Self {
        Self {
            header: default_actions_header(),
            actions: RowAction::defaults(),
            hideable: false,
            class_name: None,
            render: None,
        }
    }
}

/// Declarative description of one table column.
///
/// Serialized with a `type` discriminant, e.g.
/// `{ "type": "date", "key": "birth_date", "header": "Born", "includeTime": false }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnConfig {
    Expand(ExpandColumn),
    Id(IdColumn),
    Text(TextColumn),
    Date(DateColumn),
    Number(NumberColumn),
    Status(StatusColumn),
    Action(ActionColumn),
}

impl ColumnConfig {
    /// The `type` discriminant.
    pub fn column_type(&self) -> &'static str {
        match self {
            ColumnConfig::Expand(_) => "expand",
            ColumnConfig::Id(_) => "id",
            ColumnConfig::Text(_) => "text",
            ColumnConfig::Date(_) => "date",
            ColumnConfig::Number(_) => "number",
            ColumnConfig::Status(_) => "status",
            ColumnConfig::Action(_) => "action",
        }
    }

    /// Source field path, for kinds that read one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ColumnConfig::Expand(_) | ColumnConfig::Action(_) => None,
            ColumnConfig::Id(c) => Some(&c.key),
            ColumnConfig::Text(c) => Some(&c.key),
            ColumnConfig::Date(c) => Some(&c.key),
            ColumnConfig::Number(c) => Some(&c.key),
            ColumnConfig::Status(c) => Some(&c.key),
        }
    }

    /// Parse one config object from JSON.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ColumnError> {
        Self::from_json_at(0, value)
    }

    /// Parse one config object, reporting `index` when the tag is missing.
    ///
    /// The tag is checked before the remaining fields so an unknown kind is
    /// always reported as [`ColumnError::UnsupportedType`].
    pub fn from_json_at(index: usize, value: serde_json::Value) -> Result<Self, ColumnError> {
        let column_type = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(ColumnError::MissingType { index })?
            .to_string();

        if !COLUMN_TYPES.contains(&column_type.as_str()) {
            return Err(ColumnError::unsupported(column_type));
        }

        serde_json::from_value(value).map_err(|source| ColumnError::Invalid { column_type, source })
    }
}

/// Parse a JSON array of column configs.
pub fn parse_column_configs(json: &str) -> Result<Vec<ColumnConfig>, ColumnError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| ColumnConfig::from_json_at(index, value))
        .collect()
}

// =============================================================================
// Constructors
// =============================================================================

impl IdColumn {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: default_id_header(),
            sortable: true,
            placeholder: None,
            class_name: None,
        }
    }
}

impl TextColumn {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: true,
            max_length: None,
            placeholder: None,
            class_name: None,
            transform: None,
        }
    }

    /// Truncate to `max_length` characters.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Transform the value before display.
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.transform = Some(ValueTransform::new(f));
        self
    }
}

impl DateColumn {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: true,
            include_time: false,
            placeholder: None,
            class_name: None,
        }
    }

    /// Show hours and minutes.
    pub fn with_time(mut self) -> Self {
        self.include_time = true;
        self
    }
}

impl NumberColumn {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: true,
            currency: false,
            currency_code: None,
            precision: None,
            prefix: None,
            suffix: None,
            placeholder: None,
            class_name: None,
        }
    }

    /// Format as currency.
    pub fn currency(mut self) -> Self {
        self.currency = true;
        self
    }

    /// Fraction digits.
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Text around the formatted number.
    pub fn affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self.suffix = Some(suffix.into());
        self
    }
}

impl StatusColumn {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: true,
            statuses: BTreeMap::new(),
            placeholder: None,
            class_name: None,
        }
    }

    /// Map a raw status value to a label and style class.
    pub fn status(
        mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        self.statuses.insert(
            value.into(),
            StatusStyle {
                label: label.into(),
                class_name: Some(class_name.into()),
            },
        );
        self
    }
}

impl ActionColumn {
    pub fn new(actions: Vec<RowAction>) -> Self {
        Self {
            actions,
            ..Self::default()
        }
    }

    /// Render each row with a custom renderer instead of buttons.
    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Entity) -> Cell + Send + Sync + 'static,
    {
        self.render = Some(RowRenderer::new(f));
        self
    }
}

macro_rules! into_config {
    ($($ty:ident => $variant:ident),*) => {
        $(impl From<$ty> for ColumnConfig {
            fn from(column: $ty) -> Self {
                ColumnConfig::$variant(column)
            }
        })*
    };
}

into_config!(
    ExpandColumn => Expand,
    IdColumn => Id,
    TextColumn => Text,
    DateColumn => Date,
    NumberColumn => Number,
    StatusColumn => Status,
    ActionColumn => Action
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_names_the_tag() {
        let err = ColumnConfig::from_json(serde_json::json!({ "type": "chart", "key": "x" })).unwrap_err();
        assert!(matches!(err, ColumnError::UnsupportedType(ref t) if t == "chart"));
        assert!(err.to_string().contains("chart"));
    }

    #[test]
    fn test_missing_type_reports_index() {
        let err = parse_column_configs(r#"[{"type":"id","key":"id"},{"key":"name"}]"#).unwrap_err();
        assert!(matches!(err, ColumnError::MissingType { index: 1 }));
    }

    #[test]
    fn test_known_type_with_bad_fields() {
        let err = ColumnConfig::from_json(serde_json::json!({ "type": "text", "header": "Name" })).unwrap_err();
        assert!(matches!(err, ColumnError::Invalid { ref column_type, .. } if column_type == "text"));
    }

    #[test]
    fn test_defaults_applied() {
        let configs = parse_column_configs(
            r#"[{"type":"action"},{"type":"date","key":"created_at","header":"Created","includeTime":true}]"#,
        )
        .unwrap();
        match &configs[0] {
            ColumnConfig::Action(a) => {
                assert_eq!(a.actions, RowAction::defaults());
                assert!(!a.hideable);
                assert_eq!(a.header, "Actions");
            }
            other => panic!("unexpected {:?}", other),
        }
        match &configs[1] {
            ColumnConfig::Date(d) => assert!(d.include_time && d.sortable),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_custom_action_json_shape() {
        let configs = parse_column_configs(
            r#"[{"type":"action","actions":["view",{"custom":{"key":"print","label":"Print"}}]}]"#,
        )
        .unwrap();
        let ColumnConfig::Action(action) = &configs[0] else {
            panic!("expected action column");
        };
        assert_eq!(
            action.actions,
            vec![
                RowAction::View,
                RowAction::Custom {
                    key: "print".into(),
                    label: "Print".into()
                }
            ]
        );
    }
}
