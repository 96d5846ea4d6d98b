//! Single-field validator.

use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::FutureExt;
use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use super::Blank;
use super::Rule;
use crate::error::RuleError;
use crate::state::State;

/// Error shown when a required field is empty and no custom message is set.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";

/// Error shown when a rule fails to run (error or panic).
pub const VALIDATION_ERROR_MESSAGE: &str = "An error occurred during validation";

/// Error shown when a failing rule has an empty message.
pub const DEFAULT_INVALID_MESSAGE: &str = "Invalid value";

type EmptyCheck<V> = Arc<dyn Fn(&V) -> bool + Send + Sync>;

/// Options for a [`FieldValidator`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use roster_lib::validation::{FieldOptions, Rule};
///
/// let options = FieldOptions::new()
///     .required(true)
///     .required_message("Please enter a username")
///     .validate_on_change(true)
///     .debounce(Duration::from_millis(300))
///     .rule(Rule::new(|v: &String| v.len() >= 3, "Username is too short"));
/// assert_eq!(options.rules.len(), 1);
/// ```
pub struct FieldOptions<V> {
    /// Rules evaluated in order; the first failing rule wins.
    pub rules: Vec<Rule<V>>,
    /// Whether an empty value is an error.
    pub required: bool,
    /// Message for an empty required value. Default: [`DEFAULT_REQUIRED_MESSAGE`].
    pub required_message: Option<String>,
    /// Validate on every value change, even before the field is touched.
    pub validate_on_change: bool,
    /// Delay re-validation after a value change by this interval.
    pub debounce: Option<Duration>,
    /// Custom emptiness check replacing [`Blank`].
    pub is_empty: Option<EmptyCheck<V>>,
}

impl<V> Default for FieldOptions<V> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            required: false,
            required_message: None,
            validate_on_change: false,
            debounce: None,
            is_empty: None,
        }
    }
}

impl<V> Clone for FieldOptions<V> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            required: self.required,
            required_message: self.required_message.clone(),
            validate_on_change: self.validate_on_change,
            debounce: self.debounce,
            is_empty: self.is_empty.clone(),
        }
    }
}

impl<V> fmt::Debug for FieldOptions<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldOptions")
            .field("rules", &self.rules)
            .field("required", &self.required)
            .field("required_message", &self.required_message)
            .field("validate_on_change", &self.validate_on_change)
            .field("debounce", &self.debounce)
            .field("is_empty", &self.is_empty.is_some())
            .finish()
    }
}

impl<V> FieldOptions<V> {
    /// Creates options with no rules, not required, validating after touch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn rule(mut self, rule: Rule<V>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends several rules.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule<V>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Puts `rules` in front of the already configured ones.
    pub fn with_leading_rules(mut self, rules: impl IntoIterator<Item = Rule<V>>) -> Self {
        let mut leading: Vec<Rule<V>> = rules.into_iter().collect();
        leading.append(&mut self.rules);
        self.rules = leading;
        self
    }

    /// Sets whether the field is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the message for an empty required value.
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    /// Sets whether to validate on change before the first touch.
    pub fn validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }

    /// Sets the debounce interval for change-triggered validation.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = Some(delay);
        self
    }

    /// Replaces the default emptiness check.
    pub fn is_empty<F>(mut self, check: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        self.is_empty = Some(Arc::new(check));
        self
    }
}

/// Observable validation status of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current error message; empty when valid.
    pub error: String,
    /// Whether the user has interacted with the field.
    pub touched: bool,
    /// Whether a validation run is in flight.
    pub is_validating: bool,
}

impl FieldState {
    /// A field is valid exactly when it has no error message.
    pub fn is_valid(&self) -> bool {
        self.error.is_empty()
    }
}

struct FieldInner<V> {
    value: State<V>,
    status: State<FieldState>,
    options: FieldOptions<V>,
    /// Incremented by every validation run and by `reset`; only the run
    /// holding the latest number may write `status`.
    generation: AtomicU64,
    /// Cancels the pending debounced validation.
    pending: Mutex<Option<CancellationToken>>,
}

/// Validator for a single value.
///
/// The validator owns the value cell and the [`FieldState`]. State is only
/// changed by [`validate`](Self::validate), [`touch`](Self::touch),
/// [`reset`](Self::reset), [`set_error`](Self::set_error) and
/// [`clear_error`](Self::clear_error); [`set_value`](Self::set_value) is the
/// change reaction that may trigger a validation. Clones share state.
///
/// Validation never returns an error: required/rule failures become the
/// `error` message and a rule that errors or panics is reported as
/// [`VALIDATION_ERROR_MESSAGE`].
///
/// When a slow validation resolves after a newer one has started (or after a
/// `reset`), its result is discarded so the field always shows the outcome
/// for the latest value.
pub struct FieldValidator<V> {
    inner: Arc<FieldInner<V>>,
}

impl<V> Clone for FieldValidator<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: fmt::Debug + Clone> fmt::Debug for FieldValidator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("value", &self.inner.value.get())
            .field("state", &self.inner.status.get())
            .finish()
    }
}

impl<V: Blank + Clone + Send + Sync + 'static> FieldValidator<V> {
    /// Create a validator for `initial` with the given options.
    pub fn new(initial: V, options: FieldOptions<V>) -> Self {
        Self {
            inner: Arc::new(FieldInner {
                value: State::new(initial),
                status: State::new(FieldState::default()),
                options,
                generation: AtomicU64::new(0),
                pending: Mutex::new(None),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current value.
    pub fn value(&self) -> V {
        self.inner.value.get()
    }

    /// Snapshot of the validation status.
    pub fn state(&self) -> FieldState {
        self.inner.status.get()
    }

    /// Current error message (empty when valid).
    pub fn error(&self) -> String {
        self.inner.status.with(|s| s.error.clone())
    }

    /// Whether the field currently has no error.
    pub fn is_valid(&self) -> bool {
        self.inner.status.with(FieldState::is_valid)
    }

    /// Whether the field has been touched.
    pub fn touched(&self) -> bool {
        self.inner.status.with(|s| s.touched)
    }

    /// Whether a validation run is in flight.
    pub fn is_validating(&self) -> bool {
        self.inner.status.with(|s| s.is_validating)
    }

    /// The options this validator was built with.
    pub fn options(&self) -> &FieldOptions<V> {
        &self.inner.options
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Validate the current value. Returns whether it is valid.
    ///
    /// Before the first touch (and without `validate_on_change`) this returns
    /// `true` without evaluating anything, so untouched fields never flash
    /// errors.
    pub async fn validate(&self) -> bool {
        let inner = &self.inner;
        if !inner.options.validate_on_change && !self.touched() {
            return true;
        }

        let generation = inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        inner.status.update(|s| s.is_validating = true);

        let value = inner.value.get();
        let outcome = AssertUnwindSafe(self.evaluate(&value)).catch_unwind().await;
        let message = match outcome {
            Ok(Ok(None)) => String::new(),
            Ok(Ok(Some(message))) if message.is_empty() => DEFAULT_INVALID_MESSAGE.to_string(),
            Ok(Ok(Some(message))) => message,
            Ok(Err(err)) => {
                error!("Validation failed to run: {}", err);
                VALIDATION_ERROR_MESSAGE.to_string()
            }
            Err(panic) => {
                error!("Validation rule panicked: {}", panic_message(&panic));
                VALIDATION_ERROR_MESSAGE.to_string()
            }
        };

        let valid = message.is_empty();
        if inner.generation.load(Ordering::SeqCst) == generation {
            inner.status.update(|s| {
                s.error = message;
                s.is_validating = false;
            });
        } else {
            debug!("Discarding stale validation result (run {})", generation);
        }
        valid
    }

    /// Required check followed by the rules, in order.
    ///
    /// Returns the error message of the first failure, if any.
    async fn evaluate(&self, value: &V) -> Result<Option<String>, RuleError> {
        let options = &self.inner.options;
        let empty = match &options.is_empty {
            Some(check) => check(value),
            None => value.is_blank(),
        };

        if empty {
            if options.required {
                let message = options
                    .required_message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_REQUIRED_MESSAGE.to_string());
                return Ok(Some(message));
            }
            return Ok(None);
        }

        for rule in &options.rules {
            if !rule.check(value).await? {
                return Ok(Some(rule.message_for(value)));
            }
        }
        Ok(None)
    }

    /// Mark the field as touched and validate it.
    pub async fn touch(&self) -> bool {
        self.inner.status.update(|s| s.touched = true);
        self.validate().await
    }

    /// Clear the error, mark untouched and cancel any pending validation.
    pub fn reset(&self) {
        self.cancel_pending();
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.status.set(FieldState::default());
    }

    /// Set an error from outside (for example a server-side validation error).
    ///
    /// A validation still in flight is discarded and cannot overwrite it.
    pub fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.status.update(|s| {
            s.error = message;
            s.is_validating = false;
        });
    }

    /// Clear the current error. Discards a validation still in flight.
    pub fn clear_error(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.status.update(|s| {
            s.error.clear();
            s.is_validating = false;
        });
    }

    /// Replace the value and react to the change.
    ///
    /// Nothing is validated until the field is touched unless
    /// `validate_on_change` is set. With a debounce interval the validation
    /// runs once the value has been quiet for that long; every newer change
    /// restarts the wait.
    pub async fn set_value(&self, value: V) {
        self.inner.value.set(value);

        if !self.inner.options.validate_on_change && !self.touched() {
            return;
        }

        match self.inner.options.debounce {
            Some(delay) if !delay.is_zero() => {
                if !self.schedule_validation(delay) {
                    self.validate().await;
                }
            }
            _ => {
                self.validate().await;
            }
        }
    }

    /// Spawn a debounced validation, cancelling the pending one.
    ///
    /// Returns `false` when there is no tokio runtime to spawn on.
    fn schedule_validation(&self, delay: Duration) -> bool {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("No tokio runtime for debounced validation, validating immediately");
            return false;
        };

        let token = CancellationToken::new();
        if let Ok(mut pending) = self.inner.pending.lock() {
            if let Some(previous) = pending.replace(token.clone()) {
                previous.cancel();
            }
        }

        let field = self.clone();
        handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    field.validate().await;
                }
            }
        });
        true
    }

    fn cancel_pending(&self) {
        if let Ok(mut pending) = self.inner.pending.lock() {
            if let Some(token) = pending.take() {
                token.cancel();
            }
        }
    }
}

/// Extract a human-readable message from a panic payload.
fn panic_message(panic: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
