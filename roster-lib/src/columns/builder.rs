//! Turns column configs into column definitions.

use std::sync::Arc;

use super::{
    ActionColumn, Cell, ColumnCallbacks, ColumnConfig, ColumnDef, ColumnMeta, DEFAULT_STATUS_CLASS, DateColumn,
    ExpandColumn, Header, IdColumn, NumberColumn, RowAction, StatusColumn, TextColumn, parse_column_configs,
};
use crate::error::ColumnError;
use crate::format::{
    DEFAULT_PRECISION, DEFAULT_TRUNCATE_SUFFIX, DateProfile, FormatOptions, format_currency, format_date,
    format_decimal, truncate,
};
use crate::model::{Entity, Value, get_nested_value};

/// Build one column definition per config, in order.
pub fn create_columns<T>(configs: &[ColumnConfig], callbacks: &ColumnCallbacks<T>, options: &FormatOptions) -> Vec<ColumnDef<T>>
where
    T: Entity + 'static,
{
    let columns: Vec<ColumnDef<T>> = configs
        .iter()
        .map(|config| create_column(config, callbacks, options))
        .collect();
    log::debug!("Built {} columns", columns.len());
    columns
}

/// Parse a JSON array of configs and build the columns.
///
/// An unknown `type` fails with [`ColumnError::UnsupportedType`].
pub fn create_columns_from_json<T>(
    json: &str,
    callbacks: &ColumnCallbacks<T>,
    options: &FormatOptions,
) -> Result<Vec<ColumnDef<T>>, ColumnError>
where
    T: Entity + 'static,
{
    let configs = parse_column_configs(json)?;
    Ok(create_columns(&configs, callbacks, options))
}

/// Build a single column definition.
pub fn create_column<T>(config: &ColumnConfig, callbacks: &ColumnCallbacks<T>, options: &FormatOptions) -> ColumnDef<T>
where
    T: Entity + 'static,
{
    match config {
        ColumnConfig::Expand(c) => create_expand_column(c, callbacks),
        ColumnConfig::Id(c) => create_id_column(c, callbacks, options),
        ColumnConfig::Text(c) => create_text_column(c, callbacks, options),
        ColumnConfig::Date(c) => create_date_column(c, callbacks, options),
        ColumnConfig::Number(c) => create_number_column(c, callbacks, options),
        ColumnConfig::Status(c) => create_status_column(c, callbacks, options),
        ColumnConfig::Action(c) => create_action_column(c, callbacks),
    }
}

fn header<T>(label: &str, key: &str, sortable: bool, callbacks: &ColumnCallbacks<T>) -> Header {
    match (&callbacks.on_sort, sortable) {
        (Some(on_sort), true) => Header::Sortable {
            label: label.to_string(),
            key: key.to_string(),
            on_sort: Arc::clone(on_sort),
        },
        _ => Header::Static(label.to_string()),
    }
}

fn placeholder(column: &Option<String>, options: &FormatOptions) -> String {
    column.clone().unwrap_or_else(|| options.placeholder.clone())
}

struct Field<'a> {
    key: &'a str,
    header: &'a str,
    sortable: bool,
    class_name: &'a Option<String>,
}

fn field_column<T>(
    field: Field<'_>,
    callbacks: &ColumnCallbacks<T>,
    cell: impl Fn(&T) -> Cell + Send + Sync + 'static,
) -> ColumnDef<T> {
    ColumnDef {
        id: field.key.to_string(),
        accessor_key: Some(field.key.to_string()),
        header: header(field.header, field.key, field.sortable, callbacks),
        cell: Arc::new(cell),
        enable_sorting: field.sortable,
        enable_hiding: true,
        meta: ColumnMeta {
            display_name: field.header.to_string(),
            class_name: field.class_name.clone(),
        },
        actions: Vec::new(),
        callbacks: callbacks.clone(),
    }
}

pub fn create_expand_column<T>(config: &ExpandColumn, callbacks: &ColumnCallbacks<T>) -> ColumnDef<T>
where
    T: Entity + 'static,
{
    ColumnDef {
        id: "expand".to_string(),
        accessor_key: None,
        header: Header::Static(config.header.clone()),
        cell: Arc::new(|_: &T| Cell::expander()),
        enable_sorting: false,
        enable_hiding: false,
        meta: ColumnMeta::default(),
        actions: Vec::new(),
        callbacks: callbacks.clone(),
    }
}

/// Monospace id; falsy values show the placeholder.
pub fn create_id_column<T>(config: &IdColumn, callbacks: &ColumnCallbacks<T>, options: &FormatOptions) -> ColumnDef<T>
where
    T: Entity + 'static,
{
    let key = config.key.clone();
    let placeholder = placeholder(&config.placeholder, options);
    let field = Field {
        key: &config.key,
        header: &config.header,
        sortable: config.sortable,
        class_name: &config.class_name,
    };
    field_column(field, callbacks, move |row: &T| match get_nested_value(row, &key) {
        Some(value) if !value.is_falsy() => Cell::monospace(value.display()),
        _ => Cell::text(placeholder.clone()),
    })
}

/// Text at a dotted path, optionally transformed and truncated.
pub fn create_text_column<T>(config: &TextColumn, callbacks: &ColumnCallbacks<T>, options: &FormatOptions) -> ColumnDef<T>
where
    T: Entity + 'static,
{
    let key = config.key.clone();
    let max_length = config.max_length;
    let transform = config.transform.clone();
    let placeholder = placeholder(&config.placeholder, options);
    let field = Field {
        key: &config.key,
        header: &config.header,
        sortable: config.sortable,
        class_name: &config.class_name,
    };
    field_column(field, callbacks, move |row: &T| {
        let value = get_nested_value(row, &key).unwrap_or(Value::Null);
        let value = match &transform {
            Some(transform) => transform.apply(&value),
            None => value,
        };
        let text = match value {
            Value::Null => return Cell::text(placeholder.clone()),
            Value::String(s) if s.is_empty() => return Cell::text(placeholder.clone()),
            other => other.display(),
        };
        match max_length {
            Some(max) => Cell::text(truncate(&text, max, DEFAULT_TRUNCATE_SUFFIX)),
            None => Cell::text(text),
        }
    })
}

/// Locale-aware date, or date and time with `include_time`.
pub fn create_date_column<T>(config: &DateColumn, callbacks: &ColumnCallbacks<T>, options: &FormatOptions) -> ColumnDef<T>
where
    T: Entity + 'static,
{
    let key = config.key.clone();
    let profile = if config.include_time {
        DateProfile::DateTime
    } else {
        DateProfile::Date
    };
    let options = options.clone();
    let placeholder = placeholder(&config.placeholder, &options);
    let field = Field {
        key: &config.key,
        header: &config.header,
        sortable: config.sortable,
        class_name: &config.class_name,
    };
    field_column(field, callbacks, move |row: &T| {
        match get_nested_value(row, &key) {
            Some(value) if !value.is_falsy() => format_date(&value, profile, &options)
                .map(Cell::text)
                .unwrap_or_else(|| Cell::text(placeholder.clone())),
            _ => Cell::text(placeholder.clone()),
        }
    })
}

/// Currency or fixed-precision number. Zero is shown; missing, null and
/// blank values get the placeholder.
pub fn create_number_column<T>(
    config: &NumberColumn,
    callbacks: &ColumnCallbacks<T>,
    options: &FormatOptions,
) -> ColumnDef<T>
where
    T: Entity + 'static,
{
    let key = config.key.clone();
    let currency = config
        .currency
        .then(|| config.currency_code.clone().unwrap_or_else(|| options.currency.clone()));
    let precision = config.precision.unwrap_or(DEFAULT_PRECISION);
    let prefix = config.prefix.clone().unwrap_or_default();
    let suffix = config.suffix.clone().unwrap_or_default();
    let placeholder = placeholder(&config.placeholder, options);
    let field = Field {
        key: &config.key,
        header: &config.header,
        sortable: config.sortable,
        class_name: &config.class_name,
    };
    field_column(field, callbacks, move |row: &T| {
        let value = match get_nested_value(row, &key) {
            Some(value) if !value.is_blank() => value,
            _ => return Cell::text(placeholder.clone()),
        };
        let Some(number) = value.as_decimal() else {
            return Cell::text(value.display());
        };
        let formatted = match &currency {
            Some(code) => format_currency(number, code),
            None => format_decimal(number, precision),
        };
        Cell::text(format!("{}{}{}", prefix, formatted, suffix))
    })
}

/// Badge looked up in the status map. Unmapped values are shown as their own
/// label with [`DEFAULT_STATUS_CLASS`].
pub fn create_status_column<T>(
    config: &StatusColumn,
    callbacks: &ColumnCallbacks<T>,
    options: &FormatOptions,
) -> ColumnDef<T>
where
    T: Entity + 'static,
{
    let key = config.key.clone();
    let statuses = config.statuses.clone();
    let placeholder = placeholder(&config.placeholder, options);
    let field = Field {
        key: &config.key,
        header: &config.header,
        sortable: config.sortable,
        class_name: &config.class_name,
    };
    field_column(field, callbacks, move |row: &T| {
        let raw = match get_nested_value(row, &key) {
            Some(value) if !value.is_blank() => value.display(),
            _ => return Cell::text(placeholder.clone()),
        };
        match statuses.get(&raw) {
            Some(style) => Cell::badge(
                style.label.clone(),
                style
                    .class_name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_STATUS_CLASS.to_string()),
            ),
            None => {
                log::debug!("No style for status '{}'", raw);
                Cell::badge(raw, DEFAULT_STATUS_CLASS)
            }
        }
    })
}

fn has_handler<T>(action: &RowAction, callbacks: &ColumnCallbacks<T>) -> bool {
    match action {
        RowAction::View => callbacks.on_view.is_some(),
        RowAction::Edit => callbacks.on_edit.is_some(),
        RowAction::Delete => callbacks.on_delete.is_some(),
        RowAction::Download => callbacks.on_download.is_some(),
        RowAction::Custom { .. } => callbacks.on_custom_action.is_some(),
    }
}

/// Row actions. Never sortable; hideable only when configured.
///
/// A custom renderer takes over the cell entirely. Otherwise one button is
/// offered per configured action that has a callback.
pub fn create_action_column<T>(config: &ActionColumn, callbacks: &ColumnCallbacks<T>) -> ColumnDef<T>
where
    T: Entity + 'static,
{
    let actions: Vec<RowAction> = config
        .actions
        .iter()
        .filter(|action| has_handler(action, callbacks))
        .cloned()
        .collect();

    let cell: Arc<dyn Fn(&T) -> Cell + Send + Sync> = match config.render.clone() {
        Some(renderer) => Arc::new(move |row: &T| renderer.render(row)),
        None => {
            let actions = actions.clone();
            Arc::new(move |_: &T| Cell::actions(actions.clone()))
        }
    };

    ColumnDef {
        id: "actions".to_string(),
        accessor_key: None,
        header: Header::Static(config.header.clone()),
        cell,
        enable_sorting: false,
        enable_hiding: config.hideable,
        meta: ColumnMeta {
            display_name: config.header.clone(),
            class_name: config.class_name.clone(),
        },
        actions,
        callbacks: callbacks.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::columns::CellKind;
    use crate::format::Locale;
    use crate::model::Record;

    fn options() -> FormatOptions {
        FormatOptions::default().with_locale(Locale::En)
    }

    fn build(config: impl Into<ColumnConfig>) -> ColumnDef<Record> {
        create_column(&config.into(), &ColumnCallbacks::new(), &options())
    }

    #[test]
    fn test_text_placeholder_for_missing_null_and_empty() {
        let column = build(TextColumn::new("name", "Name"));
        assert_eq!(column.render(&Record::new(1)).text, "-");
        assert_eq!(column.render(&Record::new(1).set("name", Value::Null)).text, "-");
        assert_eq!(column.render(&Record::new(1).set("name", "")).text, "-");
    }

    #[test]
    fn test_text_truncates_to_max_length() {
        let column = build(TextColumn::new("name", "Name").max_length(8));
        let cell = column.render(&Record::new(1).set("name", "Somchai Jaidee"));
        assert_eq!(cell.text, "Somch...");
        assert_eq!(cell.text.chars().count(), 8);
    }

    #[test]
    fn test_text_nested_path_and_transform() {
        let column = build(TextColumn::new("address.province", "Province").transform(|v| {
            Value::String(v.display().to_uppercase())
        }));
        let row = Record::new(1).set(
            "address",
            Value::from(serde_json::json!({ "province": "chiang mai" })),
        );
        assert_eq!(column.render(&row).text, "CHIANG MAI");
    }

    #[test]
    fn test_id_column_is_monospace() {
        let column = build(IdColumn::new("id"));
        let cell = column.render(&Record::new(42));
        assert_eq!(cell.kind, CellKind::Monospace);
        assert_eq!(cell.text, "42");
        assert_eq!(column.render(&Record::new(0)).text, "-");
    }

    #[test]
    fn test_date_profiles() {
        let date_only = build(DateColumn::new("born", "Born"));
        let with_time = build(DateColumn::new("seen", "Seen").with_time());
        let row = Record::new(1)
            .set("born", "2024-01-15")
            .set("seen", "2024-01-15T03:30:00Z");
        assert_eq!(date_only.render(&row).text, "15 Jan 2024");
        assert_eq!(with_time.render(&row).text, "15 Jan 2024 10:30");
        assert_eq!(date_only.render(&Record::new(2)).text, "-");
    }

    #[test]
    fn test_number_zero_is_not_placeholder() {
        let column = build(NumberColumn::new("count", "Count").precision(0));
        assert_eq!(column.render(&Record::new(1).set("count", 0i64)).text, "0");
        assert_eq!(column.render(&Record::new(1)).text, "-");
    }

    #[test]
    fn test_number_blank_string_is_placeholder() {
        let column = build(NumberColumn::new("amount", "Amount").currency());
        assert_eq!(column.render(&Record::new(1).set("amount", "")).text, "-");
        assert_eq!(column.render(&Record::new(1).set("amount", "  ")).text, "-");
        assert_eq!(column.render(&Record::new(1).set("amount", "n/a")).text, "n/a");
    }

    #[test]
    fn test_number_currency_and_affixes() {
        let currency = build(NumberColumn::new("amount", "Amount").currency());
        let row = Record::new(1).set("amount", 1234.5);
        assert_eq!(currency.render(&row).text, "฿1,234.50");

        let percent = build(NumberColumn::new("rate", "Rate").precision(1).affixes("~", "%"));
        assert_eq!(percent.render(&Record::new(1).set("rate", 12.25)).text, "~12.3%");
    }

    #[test]
    fn test_status_mapped_and_fallback() {
        let column = build(StatusColumn::new("status", "Status").status("active", "Active", "status-green"));
        let mapped = column.render(&Record::new(1).set("status", "active"));
        assert_eq!(mapped.text, "Active");
        assert_eq!(mapped.class_name.as_deref(), Some("status-green"));

        let unmapped = column.render(&Record::new(1).set("status", "archived"));
        assert_eq!(unmapped.text, "archived");
        assert_eq!(unmapped.class_name.as_deref(), Some(DEFAULT_STATUS_CLASS));
    }

    #[test]
    fn test_sortable_header_only_with_callback() {
        let sorted = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&sorted);
        let callbacks = ColumnCallbacks::<Record>::new().on_sort(move |key| log.lock().unwrap().push(key.to_string()));

        let with_cb = create_column(&TextColumn::new("name", "Name").into(), &callbacks, &options());
        assert!(with_cb.header.is_sortable());
        assert!(with_cb.activate_header());
        assert_eq!(*sorted.lock().unwrap(), vec!["name".to_string()]);

        let without = build(TextColumn::new("name", "Name"));
        assert!(!without.header.is_sortable());
        assert!(!without.activate_header());
    }

    #[test]
    fn test_action_column_only_offers_handled_actions() {
        let viewed = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&viewed);
        let callbacks = ColumnCallbacks::<Record>::new().on_view(move |row: &Record| {
            log.lock().unwrap().push(row.id());
        });
        let column = create_column(&ActionColumn::default().into(), &callbacks, &options());

        assert!(!column.enable_sorting);
        assert!(!column.enable_hiding);
        assert_eq!(column.actions, vec![RowAction::View]);
        assert_eq!(column.render(&Record::new(7)).kind, CellKind::Actions(vec![RowAction::View]));

        assert!(column.trigger(&RowAction::View, &Record::new(7)));
        assert!(!column.trigger(&RowAction::Delete, &Record::new(7)));
        assert_eq!(viewed.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_action_column_custom_renderer() {
        let column = build(ActionColumn::default().render(|row| Cell::text(format!("row {}", row.id()))));
        assert_eq!(column.render(&Record::new(3)).text, "row 3");
    }

    #[test]
    fn test_unknown_type_from_json() {
        let err = create_columns_from_json::<Record>(
            r#"[{"type":"sparkline","key":"x","header":"X"}]"#,
            &ColumnCallbacks::new(),
            &options(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("sparkline"));
    }
}
