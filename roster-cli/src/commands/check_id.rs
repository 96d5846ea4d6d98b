//! `roster check-id`: validate Thai citizen IDs.

use roster_lib::format::format_thai_id;
use roster_lib::validation::FieldOptions;
use roster_lib::validation::presets::thai_citizen_id;

use crate::error::CliError;

/// One checked ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdReport {
    pub input: String,
    pub formatted: String,
    /// Empty when the ID is valid.
    pub error: String,
}

pub async fn check(ids: &[String]) -> Vec<IdReport> {
    let mut reports = Vec::with_capacity(ids.len());
    for id in ids {
        let field = thai_citizen_id(id.as_str(), FieldOptions::new().required(true));
        field.touch().await;
        reports.push(IdReport {
            input: id.clone(),
            formatted: format_thai_id(id),
            error: field.error(),
        });
    }
    reports
}

/// Print one line per ID. Fails when any ID is invalid.
pub async fn run(ids: &[String]) -> Result<String, CliError> {
    let reports = check(ids).await;
    let invalid = reports.iter().filter(|r| !r.error.is_empty()).count();

    let mut out = String::new();
    for report in &reports {
        if report.error.is_empty() {
            out.push_str(&format!("{}  ok\n", report.formatted));
        } else {
            log::info!("Rejected citizen ID '{}': {}", report.input, report.error);
            out.push_str(&format!("{}  {}\n", report.input, report.error));
        }
    }

    if invalid > 0 {
        return Err(CliError::Invalid {
            count: invalid,
            report: out,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reports_each_id() {
        let ids = vec!["1234567890121".to_string(), "12345".to_string(), "1234567890122".to_string()];
        let reports = check(&ids).await;

        assert_eq!(reports[0].formatted, "1-2345-67890-12-1");
        assert_eq!(reports[0].error, "");
        assert_eq!(reports[1].error, "Citizen ID must be 13 digits (got 5)");
        assert_eq!(reports[2].error, "Invalid citizen ID");
    }

    #[tokio::test]
    async fn test_dashed_input_is_accepted() {
        let out = run(&["1-2345-67890-12-1".to_string()]).await.unwrap();
        assert_eq!(out, "1-2345-67890-12-1  ok\n");
    }

    #[tokio::test]
    async fn test_any_invalid_id_fails() {
        let err = run(&["1234567890121".to_string(), "".to_string()]).await.unwrap_err();
        match err {
            CliError::Invalid { count, report } => {
                assert_eq!(count, 1);
                assert_eq!(report, "1-2345-67890-12-1  ok\n  This field is required\n");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
