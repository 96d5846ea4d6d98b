//! The CRUD dispatcher.

use std::sync::Arc;

use super::{CrudBackend, CrudOptions, DisplayField, Prompt, fill_template};
use crate::error::CrudError;
use crate::model::Entity;
use crate::toast::{Toast, ToastSink};

/// Result of [`CrudOperations::delete_item`].
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The user declined; no request was made.
    Cancelled,
    Deleted,
    /// The request failed. The user has already been notified.
    Failed(CrudError),
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// View, edit, delete and custom actions for one entity type.
///
/// Failures never escape as errors from `delete_item` or
/// `handle_custom_action`: they are logged with the item id and reported as
/// error toasts.
pub struct CrudOperations<T> {
    options: CrudOptions<T>,
    backend: Arc<dyn CrudBackend>,
    prompt: Arc<dyn Prompt>,
    toasts: Arc<dyn ToastSink>,
}

impl<T: Entity> CrudOperations<T> {
    pub fn new(
        options: CrudOptions<T>,
        backend: Arc<dyn CrudBackend>,
        prompt: Arc<dyn Prompt>,
        toasts: Arc<dyn ToastSink>,
    ) -> Self {
        Self {
            options,
            backend,
            prompt,
            toasts,
        }
    }

    pub fn options(&self) -> &CrudOptions<T> {
        &self.options
    }

    /// Name of `item` for prompts and toasts, falling back to `ID: {id}`.
    pub fn get_display_name(&self, item: &T) -> String {
        let name = match &self.options.display_field {
            DisplayField::Fn(f) => f(item),
            DisplayField::Field(field) => item
                .field(field)
                .filter(|value| !value.is_blank())
                .map(|value| value.display())
                .unwrap_or_default(),
        };
        if name.trim().is_empty() {
            format!("ID: {}", item.id())
        } else {
            name
        }
    }

    /// Navigate to `{prefix}.show` for the item.
    pub fn view_item(&self, item: &T) -> Result<(), CrudError> {
        self.navigate("show", item)
    }

    /// Navigate to `{prefix}.edit` for the item.
    pub fn edit_item(&self, item: &T) -> Result<(), CrudError> {
        self.navigate("edit", item)
    }

    fn navigate(&self, action: &str, item: &T) -> Result<(), CrudError> {
        let route = self.options.route(action);
        self.backend.navigate(&route, &item.id()).inspect_err(|e| {
            log::error!("Navigation to '{}' for id {} failed: {}", route, item.id(), e);
        })
    }

    /// Confirm, then delete through `{prefix}.destroy`.
    pub async fn delete_item(&self, item: &T) -> DeleteOutcome {
        let id = item.id();
        let name = self.get_display_name(item);
        let vars = [
            ("entity", self.options.entity_display_name.as_str()),
            ("name", name.as_str()),
        ];
        let messages = &self.options.messages;

        let question = fill_template(&messages.delete_confirm, &vars);
        if !self.prompt.confirm(&question).await {
            log::debug!("Delete of {} {} cancelled", self.options.entity_display_name, id);
            return DeleteOutcome::Cancelled;
        }

        let route = self.options.route("destroy");
        match self.backend.delete(&route, &id).await {
            Ok(()) => {
                log::info!("Deleted {} {}", self.options.entity_display_name, id);
                self.toasts
                    .notify(Toast::success(fill_template(&messages.delete_success, &vars)));
                DeleteOutcome::Deleted
            }
            Err(e) => {
                log::error!("Failed to delete {} {}: {}", self.options.entity_display_name, id, e);
                self.toasts
                    .notify(Toast::error(fill_template(&messages.delete_error, &vars)));
                DeleteOutcome::Failed(e)
            }
        }
    }

    /// Run the custom action registered under `key`.
    ///
    /// Returns `true` when the handler ran and succeeded.
    pub async fn handle_custom_action(&self, key: &str, item: &T) -> bool {
        let messages = &self.options.messages;
        let Some(action) = self.options.custom_actions.get(key) else {
            log::warn!("Unknown custom action '{}' for id {}", key, item.id());
            self.toasts
                .notify(Toast::error(fill_template(&messages.unknown_action, &[("action", key)])));
            return false;
        };

        match (action.handler)(item).await {
            Ok(()) => {
                log::info!("Custom action '{}' succeeded for id {}", key, item.id());
                if let Some(message) = &action.success_message {
                    self.toasts.notify(Toast::success(message.clone()));
                }
                true
            }
            Err(e) => {
                log::error!("Custom action '{}' failed for id {}: {}", key, item.id(), e);
                let error = e.to_string();
                self.toasts.notify(Toast::error(fill_template(
                    &messages.action_error,
                    &[("action", key), ("error", error.as_str())],
                )));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use futures::FutureExt;

    use super::*;
    use crate::crud::{CustomAction, FixedAnswer};
    use crate::model::{Record, RecordId};
    use crate::toast::{ToastLevel, ToastQueue};

    #[derive(Default)]
    struct NoopBackend;

    #[async_trait]
    impl CrudBackend for NoopBackend {
        fn navigate(&self, _route: &str, _id: &RecordId) -> Result<(), CrudError> {
            Ok(())
        }

        async fn delete(&self, _route: &str, _id: &RecordId) -> Result<(), CrudError> {
            Ok(())
        }
    }

    fn ops(options: CrudOptions<Record>, toasts: &ToastQueue) -> CrudOperations<Record> {
        CrudOperations::new(
            options,
            Arc::new(NoopBackend),
            Arc::new(FixedAnswer(true)),
            Arc::new(toasts.clone()),
        )
    }

    #[test]
    fn test_display_name_field_then_fallback() {
        let toasts = ToastQueue::new();
        let ops = ops(CrudOptions::new("citizens", "citizen"), &toasts);
        assert_eq!(ops.get_display_name(&Record::new(1).set("name", "Somchai")), "Somchai");
        assert_eq!(ops.get_display_name(&Record::new(2).set("name", "  ")), "ID: 2");
        assert_eq!(ops.get_display_name(&Record::new(3)), "ID: 3");
    }

    #[test]
    fn test_display_name_function() {
        let toasts = ToastQueue::new();
        let options = CrudOptions::new("citizens", "citizen").display_field(DisplayField::from_fn(|r: &Record| {
            format!(
                "{} {}",
                r.get("first_name").map(|v| v.display()).unwrap_or_default(),
                r.get("last_name").map(|v| v.display()).unwrap_or_default()
            )
        }));
        let ops = ops(options, &toasts);
        let row = Record::new(1).set("first_name", "Somchai").set("last_name", "Jaidee");
        assert_eq!(ops.get_display_name(&row), "Somchai Jaidee");
    }

    #[tokio::test]
    async fn test_unknown_custom_action_toasts_error() {
        let toasts = ToastQueue::new();
        let ops = ops(CrudOptions::new("citizens", "citizen"), &toasts);
        assert!(!ops.handle_custom_action("print", &Record::new(1)).await);
        let all = toasts.drain();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].level, ToastLevel::Error);
        assert_eq!(all[0].message, "Unknown action: print");
    }

    #[tokio::test]
    async fn test_custom_action_failure_and_success() {
        let toasts = ToastQueue::new();
        let options = CrudOptions::new("payments", "payment")
            .custom_action(
                "refund",
                CustomAction::new("Refund", |_: &Record| async { Err::<(), _>(CrudError::action("gateway down")) }.boxed()),
            )
            .custom_action(
                "receipt",
                CustomAction::new("Receipt", |_: &Record| async { Ok::<(), CrudError>(()) }.boxed()).success_message("Receipt sent"),
            );
        let ops = ops(options, &toasts);

        assert!(!ops.handle_custom_action("refund", &Record::new(9)).await);
        assert!(ops.handle_custom_action("receipt", &Record::new(9)).await);

        let all = toasts.drain();
        assert_eq!(all[0].level, ToastLevel::Error);
        assert_eq!(all[0].message, "Action \"refund\" failed: gateway down");
        assert_eq!(all[1], Toast::success("Receipt sent"));
    }
}
