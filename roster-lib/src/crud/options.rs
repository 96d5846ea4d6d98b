//! Configuration of [`CrudOperations`](super::CrudOperations).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::CrudError;

/// How an entity is named in prompts and toasts.
pub enum DisplayField<T> {
    /// Read this field; blank values fall back to `ID: {id}`.
    Field(String),
    /// Compute the name.
    Fn(Arc<dyn Fn(&T) -> String + Send + Sync>),
}

impl<T> DisplayField<T> {
    pub fn field(name: impl Into<String>) -> Self {
        DisplayField::Field(name.into())
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        DisplayField::Fn(Arc::new(f))
    }
}

impl<T> Clone for DisplayField<T> {
    fn clone(&self) -> Self {
        match self {
            DisplayField::Field(name) => DisplayField::Field(name.clone()),
            DisplayField::Fn(f) => DisplayField::Fn(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for DisplayField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayField::Field(name) => f.debug_tuple("Field").field(name).finish(),
            DisplayField::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

/// Async handler of a custom row action.
pub type ActionHandler<T> = Arc<dyn Fn(&T) -> BoxFuture<'static, Result<(), CrudError>> + Send + Sync>;

/// A page-specific row action (`print`, `export`, ...).
pub struct CustomAction<T> {
    pub label: String,
    pub handler: ActionHandler<T>,
    /// Toast shown when the handler succeeds. Silent when `None`.
    pub success_message: Option<String>,
}

impl<T> CustomAction<T> {
    pub fn new<F>(label: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&T) -> BoxFuture<'static, Result<(), CrudError>> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            handler: Arc::new(handler),
            success_message: None,
        }
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }
}

impl<T> Clone for CustomAction<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            handler: Arc::clone(&self.handler),
            success_message: self.success_message.clone(),
        }
    }
}

impl<T> fmt::Debug for CustomAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomAction")
            .field("label", &self.label)
            .field("success_message", &self.success_message)
            .finish_non_exhaustive()
    }
}

/// Message templates.
///
/// `{entity}` is replaced by the entity display name, `{name}` by the item's
/// display name, `{action}` by the action key and `{error}` by the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudMessages {
    pub delete_confirm: String,
    pub delete_success: String,
    pub delete_error: String,
    pub action_error: String,
    pub unknown_action: String,
}

impl Default for CrudMessages {
    fn default() -> Self {
        Self {
            delete_confirm: "Are you sure you want to delete {entity} \"{name}\"?".to_string(),
            delete_success: "{entity} \"{name}\" was deleted".to_string(),
            delete_error: "Could not delete {entity} \"{name}\"".to_string(),
            action_error: "Action \"{action}\" failed: {error}".to_string(),
            unknown_action: "Unknown action: {action}".to_string(),
        }
    }
}

/// Replace `{key}` placeholders in a message template.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{}}}", key), value)
    })
}

/// Options of a [`CrudOperations`](super::CrudOperations) instance.
///
/// # Example
///
/// ```
/// use roster_lib::Record;
/// use roster_lib::crud::{CrudOptions, DisplayField};
///
/// let options = CrudOptions::<Record>::new("citizens", "citizen")
///     .display_field(DisplayField::field("full_name"));
/// assert_eq!(options.route("destroy"), "citizens.destroy");
/// ```
pub struct CrudOptions<T> {
    /// Resource route prefix (`citizens`).
    pub route_prefix: String,
    /// Human name of the entity type (`citizen`).
    pub entity_display_name: String,
    pub display_field: DisplayField<T>,
    pub custom_actions: BTreeMap<String, CustomAction<T>>,
    pub messages: CrudMessages,
}

impl<T> CrudOptions<T> {
    /// Options with `name` as the display field and default messages.
    pub fn new(route_prefix: impl Into<String>, entity_display_name: impl Into<String>) -> Self {
        Self {
            route_prefix: route_prefix.into(),
            entity_display_name: entity_display_name.into(),
            display_field: DisplayField::field("name"),
            custom_actions: BTreeMap::new(),
            messages: CrudMessages::default(),
        }
    }

    pub fn display_field(mut self, display_field: DisplayField<T>) -> Self {
        self.display_field = display_field;
        self
    }

    pub fn custom_action(mut self, key: impl Into<String>, action: CustomAction<T>) -> Self {
        self.custom_actions.insert(key.into(), action);
        self
    }

    pub fn messages(mut self, messages: CrudMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Full route name for a resource action (`show` → `citizens.show`).
    pub fn route(&self, action: &str) -> String {
        format!("{}.{}", self.route_prefix, action)
    }
}

impl<T> Clone for CrudOptions<T> {
    fn clone(&self) -> Self {
        Self {
            route_prefix: self.route_prefix.clone(),
            entity_display_name: self.entity_display_name.clone(),
            display_field: self.display_field.clone(),
            custom_actions: self.custom_actions.clone(),
            messages: self.messages.clone(),
        }
    }
}

impl<T> fmt::Debug for CrudOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudOptions")
            .field("route_prefix", &self.route_prefix)
            .field("entity_display_name", &self.entity_display_name)
            .field("display_field", &self.display_field)
            .field("custom_actions", &self.custom_actions.keys().collect::<Vec<_>>())
            .field("messages", &self.messages)
            .finish()
    }
}
