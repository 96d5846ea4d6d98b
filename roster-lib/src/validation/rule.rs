//! Validation rules.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::RuleError;

/// Type alias for boxed futures used in async validation.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Type alias for rule predicates. `Err` means the rule could not run.
type Predicate<V> = Arc<dyn Fn(&V) -> BoxFuture<'static, Result<bool, String>> + Send + Sync>;

/// Error message of a rule: fixed text or derived from the rejected value.
pub enum Message<V> {
    Static(String),
    Dynamic(Arc<dyn Fn(&V) -> String + Send + Sync>),
}

impl<V> Message<V> {
    /// Build a message from the rejected value.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&V) -> String + Send + Sync + 'static,
    {
        Message::Dynamic(Arc::new(f))
    }

    /// Render the message for a value.
    pub fn render(&self, value: &V) -> String {
        match self {
            Message::Static(text) => text.clone(),
            Message::Dynamic(f) => f(value),
        }
    }
}

impl<V> Clone for Message<V> {
    fn clone(&self) -> Self {
        match self {
            Message::Static(text) => Message::Static(text.clone()),
            Message::Dynamic(f) => Message::Dynamic(Arc::clone(f)),
        }
    }
}

impl<V> fmt::Debug for Message<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Message::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl<V> From<&str> for Message<V> {
    fn from(text: &str) -> Self {
        Message::Static(text.to_string())
    }
}

impl<V> From<String> for Message<V> {
    fn from(text: String) -> Self {
        Message::Static(text)
    }
}

/// One validation rule: a predicate over the value plus the message shown
/// when the predicate returns `false`.
///
/// Predicates may be synchronous, fallible or asynchronous (for example a
/// uniqueness check against the server). A predicate that errors or panics
/// does not fail the value; the field validator reports a generic
/// validation error instead.
///
/// # Example
///
/// ```
/// use roster_lib::validation::{Message, Rule};
///
/// let not_admin = Rule::new(|v: &String| v != "admin", "This username is reserved")
///     .named("reserved");
///
/// let min_len = Rule::new(
///     |v: &String| v.len() >= 3,
///     Message::from_fn(|v: &String| format!("Too short ({} characters)", v.len())),
/// );
/// assert_eq!(not_admin.name(), Some("reserved"));
/// assert_eq!(min_len.message_for(&"ab".to_string()), "Too short (2 characters)");
/// ```
pub struct Rule<V> {
    name: Option<String>,
    predicate: Predicate<V>,
    message: Message<V>,
}

impl<V: Clone + Send + Sync + 'static> Rule<V> {
    /// Add a synchronous rule.
    pub fn new<F>(predicate: F, message: impl Into<Message<V>>) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self::from_predicate(
            Arc::new(move |value: &V| -> BoxFuture<'static, Result<bool, String>> {
                let ok = predicate(value);
                Box::pin(async move { Ok(ok) })
            }),
            message,
        )
    }

    /// Add a synchronous rule that may fail to run.
    pub fn try_new<F, E>(predicate: F, message: impl Into<Message<V>>) -> Self
    where
        F: Fn(&V) -> Result<bool, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        Self::from_predicate(
            Arc::new(move |value: &V| -> BoxFuture<'static, Result<bool, String>> {
                let outcome = predicate(value).map_err(|e| e.to_string());
                Box::pin(async move { outcome })
            }),
            message,
        )
    }

    /// Add an asynchronous rule.
    pub fn new_async<F, Fut>(predicate: F, message: impl Into<Message<V>>) -> Self
    where
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        Self::from_predicate(
            Arc::new(move |value: &V| -> BoxFuture<'static, Result<bool, String>> {
                let fut = predicate(value.clone());
                Box::pin(async move { Ok(fut.await) })
            }),
            message,
        )
    }

    /// Add an asynchronous rule that may fail to run.
    pub fn try_async<F, Fut, E>(predicate: F, message: impl Into<Message<V>>) -> Self
    where
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, E>> + Send + 'static,
        E: fmt::Display,
    {
        Self::from_predicate(
            Arc::new(move |value: &V| -> BoxFuture<'static, Result<bool, String>> {
                let fut = predicate(value.clone());
                Box::pin(async move { fut.await.map_err(|e| e.to_string()) })
            }),
            message,
        )
    }

    fn from_predicate(predicate: Predicate<V>, message: impl Into<Message<V>>) -> Self {
        Self {
            name: None,
            predicate,
            message: message.into(),
        }
    }
}

impl<V> Rule<V> {
    /// Attach a debug name, used in logs when the rule fails to run.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The rule's debug name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Evaluate the predicate.
    pub async fn check(&self, value: &V) -> Result<bool, RuleError> {
        (self.predicate)(value)
            .await
            .map_err(|message| RuleError::new(self.name.as_deref().unwrap_or("anonymous"), message))
    }

    /// The error message for a rejected value.
    pub fn message_for(&self, value: &V) -> String {
        self.message.render(value)
    }
}

impl<V> Clone for Rule<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            predicate: Arc::clone(&self.predicate),
            message: self.message.clone(),
        }
    }
}

impl<V> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
