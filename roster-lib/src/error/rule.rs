//! Validation rule execution errors

/// A validation rule failed to *run* (as opposed to reporting an invalid value).
///
/// Field validators never propagate this to callers; it is logged and replaced
/// with the generic validation error message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Rule '{rule}' failed to execute: {message}")]
pub struct RuleError {
    /// Rule name, or `"anonymous"`.
    pub rule: String,
    /// Underlying failure description.
    pub message: String,
}

impl RuleError {
    /// Creates a new rule execution error.
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
        }
    }
}
