//! Subcommand implementations.

pub mod check_id;
pub mod crud;
pub mod table;
pub mod validate;

use std::fs;
use std::path::Path;

use roster_lib::toast::LogToasts;
use roster_lib::{RecordId, Toast, ToastSink};

use crate::error::CliError;

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> Result<serde_json::Value, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Numeric ids become [`RecordId::Int`], anything else a string id.
pub fn parse_record_id(raw: &str) -> RecordId {
    match raw.parse::<i64>() {
        Ok(id) => RecordId::Int(id),
        Err(_) => RecordId::Str(raw.to_string()),
    }
}

/// Prints toasts to stderr and mirrors them to the log file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleToasts;

impl ToastSink for ConsoleToasts {
    fn notify(&self, toast: Toast) {
        eprintln!("[{}] {}", toast.level.label(), toast.message);
        LogToasts.notify(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_toasts_accept_every_level() {
        let sink: &dyn ToastSink = &ConsoleToasts;
        sink.notify(Toast::info("All filters cleared"));
        sink.notify(Toast::success("Citizen \"Somchai\" was deleted"));
        sink.notify(Toast::warning("Slow response"));
        sink.notify(Toast::error("Could not delete"));
    }

    #[test]
    fn test_record_ids() {
        assert_eq!(parse_record_id("42"), RecordId::Int(42));
        assert_eq!(parse_record_id("-3"), RecordId::Int(-3));
        assert_eq!(parse_record_id("c-0042"), RecordId::Str("c-0042".into()));
    }

    #[test]
    fn test_read_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        let err = read_json(&path).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));

        fs::write(&path, "[1, 2").unwrap();
        let err = read_json(&path).unwrap_err();
        assert!(err.to_string().contains("records.json"));
    }
}
