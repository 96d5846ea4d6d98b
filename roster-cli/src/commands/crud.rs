//! `roster link` and `roster delete`: CRUD actions against a running app.

use std::sync::Arc;

use async_trait::async_trait;
use roster_lib::Record;
use roster_lib::crud::{CrudOperations, CrudOptions, DeleteOutcome, FixedAnswer, HttpBackend, Prompt, RouteTable};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{ConsoleToasts, parse_record_id};
use crate::cli::LinkAction;
use crate::error::CliError;
use crate::settings::Settings;

/// Asks on stderr and reads the answer from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

#[async_trait]
impl Prompt for StdinPrompt {
    async fn confirm(&self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        let mut answer = String::new();
        match BufReader::new(tokio::io::stdin()).read_line(&mut answer).await {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                log::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Which record to act on.
#[derive(Debug, Clone)]
pub struct Target {
    pub resource: String,
    pub id: String,
    pub name: Option<String>,
    pub entity: String,
}

impl Target {
    fn record(&self) -> Record {
        let record = Record::new(parse_record_id(&self.id));
        match &self.name {
            Some(name) => record.set("name", name.as_str()),
            None => record,
        }
    }

    fn options(&self) -> CrudOptions<Record> {
        CrudOptions::new(self.resource.as_str(), self.entity.as_str())
    }
}

/// HTTP backend for `resource` configured from settings.
pub fn backend(settings: &Settings, resource: &str, native_methods: bool) -> Result<HttpBackend, CliError> {
    let base = settings.base_url.as_deref().ok_or(CliError::MissingBaseUrl)?;
    let routes = RouteTable::new(base)?.resource(resource);
    let mut backend = HttpBackend::new(routes).timeout(settings.timeout());
    if let Some(token) = &settings.bearer_token {
        backend = backend.bearer_token(token.as_str());
    }
    if native_methods {
        backend = backend.native_methods();
    }
    Ok(backend)
}

/// Resolve the show or edit page of a record.
pub fn link(target: &Target, action: LinkAction, settings: &Settings) -> Result<String, CliError> {
    let backend = backend(settings, &target.resource, false)?;
    let ops = CrudOperations::new(
        target.options(),
        Arc::new(backend.clone()),
        Arc::new(FixedAnswer(false)),
        Arc::new(ConsoleToasts),
    );

    let record = target.record();
    match action {
        LinkAction::Show => ops.view_item(&record)?,
        LinkAction::Edit => ops.edit_item(&record)?,
    }
    Ok(backend
        .last_navigation()
        .map(|url| format!("{}\n", url))
        .unwrap_or_default())
}

/// Confirm and delete a record.
pub async fn delete(
    target: &Target,
    backend: HttpBackend,
    prompt: Arc<dyn Prompt>,
) -> Result<String, CliError> {
    let ops = CrudOperations::new(target.options(), Arc::new(backend), prompt, Arc::new(ConsoleToasts));
    let record = target.record();

    match ops.delete_item(&record).await {
        DeleteOutcome::Deleted => Ok(format!("Deleted {} {}\n", target.resource, target.id)),
        DeleteOutcome::Cancelled => Ok("Cancelled\n".to_string()),
        DeleteOutcome::Failed(e) => {
            log::error!("Delete of {} {} failed: {}", target.resource, target.id, e);
            Err(CliError::DeleteFailed)
        }
    }
}

/// Prompt for the `--yes` flag.
pub fn prompt(yes: bool) -> Arc<dyn Prompt> {
    if yes {
        Arc::new(FixedAnswer(true))
    } else {
        Arc::new(StdinPrompt)
    }
}
