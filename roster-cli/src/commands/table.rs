//! `roster table`: filter, sort, group and page records through a column config.

use std::sync::Arc;

use roster_lib::Record;
use roster_lib::columns::{ColumnCallbacks, ColumnConfig, ColumnDef, ColumnSet, parse_column_configs};
use roster_lib::table::{ColumnFilter, ColumnSort, DataTable, SortDirection, TableEngine, VisibilityState};

use super::{ConsoleToasts, read_json};
use crate::cli::TableArgs;
use crate::error::CliError;
use crate::render::render_table;
use crate::settings::Settings;

pub fn run(args: &TableArgs, settings: &Settings) -> Result<String, CliError> {
    let records = Record::many_from_json(read_json(&args.records)?)?;
    let columns_json = std::fs::read_to_string(&args.columns).map_err(|source| CliError::Read {
        path: args.columns.clone(),
        source,
    })?;
    let configs = parse_column_configs(&columns_json)?;
    log::info!("Loaded {} records and {} columns", records.len(), configs.len());
    render_records(records, configs, args, settings)
}

/// Render `records` as text using the table state described by `args`.
pub fn render_records(
    records: Vec<Record>,
    configs: Vec<ColumnConfig>,
    args: &TableArgs,
    settings: &Settings,
) -> Result<String, CliError> {
    let sorting = args.sort.iter().map(|s| parse_sort(s)).collect::<Vec<_>>();
    let filters = args
        .filter
        .iter()
        .map(|f| parse_filter(f))
        .collect::<Result<Vec<_>, _>>()?;
    let hidden: VisibilityState = args.hide.iter().map(|id| (id.clone(), false)).collect();

    let mut table = DataTable::new(Arc::new(ConsoleToasts))
        .with_page_size(args.page_size.unwrap_or(settings.page_size));
    table.on_sorting_change(sorting);
    table.on_column_filters_change(filters);
    if let Some(search) = &args.search {
        table.on_global_filter_change(search.clone());
    }
    table.on_column_visibility_change(hidden);
    table.on_grouping_change(args.group_by.clone());

    let columns = ColumnSet::new(configs, ColumnCallbacks::new(), settings.format.clone());
    let engine = table.mount(columns, records);
    engine.set_page_index(args.page.saturating_sub(1));

    let visible = engine.visible_columns();
    let headers = headers(engine, &visible);

    if args.group_by.is_empty() {
        let rows = cells(&visible, &engine.row_model());
        let total = engine.filtered_rows().len();
        let page = engine.page_index() + 1;
        let mut out = render_table(&headers, &rows);
        out.push_str(&format!("Page {} of {} ({} rows)\n", page, engine.page_count(), total));
        return Ok(out);
    }

    let mut out = String::new();
    for group in engine.grouped_rows() {
        out.push_str(&format!("== {} ({}) ==\n", group.label(), group.rows.len()));
        out.push_str(&render_table(&headers, &cells(&visible, &group.rows)));
        out.push('\n');
    }
    Ok(out)
}

fn headers(engine: &TableEngine<Record>, columns: &[ColumnDef<Record>]) -> Vec<String> {
    columns
        .iter()
        .map(|column| match engine.sort_direction(&column.id) {
            Some(SortDirection::Asc) => format!("{} ^", column.header.label()),
            Some(SortDirection::Desc) => format!("{} v", column.header.label()),
            None => column.header.label().to_string(),
        })
        .collect()
}

fn cells(columns: &[ColumnDef<Record>], rows: &[Arc<Record>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| columns.iter().map(|column| column.render(row).text).collect())
        .collect()
}

/// `name` sorts ascending, `-name` descending.
fn parse_sort(raw: &str) -> ColumnSort {
    match raw.strip_prefix('-') {
        Some(id) => ColumnSort::desc(id),
        None => ColumnSort::asc(raw),
    }
}

fn parse_filter(raw: &str) -> Result<ColumnFilter, CliError> {
    match raw.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => Ok(ColumnFilter::new(id.trim(), value)),
        _ => Err(CliError::Argument {
            flag: "--filter",
            value: raw.to_string(),
            expected: "column=text",
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use roster_lib::columns::{IdColumn, NumberColumn, StatusColumn, TextColumn};
    use roster_lib::format::Locale;

    use super::*;

    fn args() -> TableArgs {
        TableArgs {
            records: PathBuf::new(),
            columns: PathBuf::new(),
            sort: vec![],
            filter: vec![],
            search: None,
            group_by: vec![],
            hide: vec![],
            page: 1,
            page_size: None,
        }
    }

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.format.locale = Locale::En;
        settings
    }

    fn configs() -> Vec<ColumnConfig> {
        vec![
            IdColumn::new("id").into(),
            TextColumn::new("name", "Name").into(),
            NumberColumn::new("amount", "Amount").currency().into(),
            StatusColumn::new("status", "Status")
                .status("paid", "Paid", "green")
                .into(),
        ]
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new(1).set("name", "Somchai").set("amount", 1250i64).set("status", "paid"),
            Record::new(2).set("name", "Ploy").set("amount", 80i64).set("status", "pending"),
            Record::new(3).set("name", "Arthit").set("status", "paid"),
        ]
    }

    #[test]
    fn test_renders_sorted_page() {
        let mut args = args();
        args.sort = vec!["-name".into()];

        let out = render_records(records(), configs(), &args, &settings()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "ID | Name v  | Amount    | Status");
        assert!(lines[2].starts_with("1  | Somchai"));
        assert!(lines[3].starts_with("2  | Ploy"));
        assert!(lines[4].starts_with("3  | Arthit  | -"));
        assert!(lines[3].ends_with("pending"));
        assert_eq!(lines[5], "Page 1 of 1 (3 rows)");
    }

    #[test]
    fn test_filters_and_hides() {
        let mut args = args();
        args.filter = vec!["status=paid".into()];
        args.hide = vec!["amount".into()];

        let out = render_records(records(), configs(), &args, &settings()).unwrap();
        assert!(!out.contains("Amount"));
        assert!(out.contains("Somchai"));
        assert!(out.contains("Arthit"));
        assert!(!out.contains("Ploy"));
        assert!(out.ends_with("Page 1 of 1 (2 rows)\n"));
    }

    #[test]
    fn test_pages_are_clamped() {
        let mut args = args();
        args.page_size = Some(2);
        args.page = 9;

        let out = render_records(records(), configs(), &args, &settings()).unwrap();
        assert!(out.contains("Arthit"));
        assert!(!out.contains("Somchai"));
        assert!(out.ends_with("Page 2 of 2 (3 rows)\n"));
    }

    #[test]
    fn test_groups_by_status() {
        let mut args = args();
        args.group_by = vec!["status".into()];

        let out = render_records(records(), configs(), &args, &settings()).unwrap();
        assert!(out.starts_with("== paid (2) ==\n"));
        assert!(out.contains("== pending (1) ==\n"));
    }

    #[test]
    fn test_bad_filter_is_rejected() {
        let mut args = args();
        args.filter = vec!["paid".into()];

        let err = render_records(records(), configs(), &args, &settings()).unwrap_err();
        assert!(matches!(err, CliError::Argument { flag: "--filter", .. }));
    }
}
