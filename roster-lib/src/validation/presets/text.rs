//! Text validators: length, pattern, e-mail, Thai phone, URL.

use std::time::Duration;

use regex::Regex;

use crate::format::{is_email, is_thai_phone, is_url};
use crate::validation::{FieldOptions, FieldValidator, Rule};

/// Options for text validators.
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    /// Whether the field is required.
    pub required: bool,
    /// Message for an empty required value.
    pub required_message: Option<String>,
    /// Minimum length in characters (non-empty values only).
    pub min_length: Option<usize>,
    /// Maximum length in characters (non-empty values only).
    pub max_length: Option<usize>,
    /// Pattern the whole value must match.
    pub pattern: Option<Regex>,
    /// Message for a pattern mismatch.
    pub pattern_message: Option<String>,
    /// Validate before the first touch.
    pub validate_on_change: bool,
    /// Debounce interval for change-triggered validation.
    pub debounce: Option<Duration>,
}

impl TextOptions {
    /// Creates options for an optional, unconstrained text field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the field is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the minimum length.
    pub fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Sets the maximum length.
    pub fn with_max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Sets a pattern and its mismatch message.
    pub fn with_pattern(mut self, pattern: Regex, message: impl Into<String>) -> Self {
        self.pattern = Some(pattern);
        self.pattern_message = Some(message.into());
        self
    }

    /// Sets whether to validate before the first touch.
    pub fn with_validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }

    /// Sets the debounce interval.
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = Some(delay);
        self
    }

    /// Length and pattern rules described by these options.
    pub fn rules(&self) -> Vec<Rule<String>> {
        let mut rules = Vec::new();

        if let Some(min) = self.min_length {
            rules.push(
                Rule::new(
                    move |v: &String| v.is_empty() || v.chars().count() >= min,
                    format!("Must be at least {} characters", min),
                )
                .named("min_length"),
            );
        }

        if let Some(max) = self.max_length {
            rules.push(
                Rule::new(
                    move |v: &String| v.is_empty() || v.chars().count() <= max,
                    format!("Must be at most {} characters", max),
                )
                .named("max_length"),
            );
        }

        if let Some(pattern) = self.pattern.clone() {
            let message = self
                .pattern_message
                .clone()
                .unwrap_or_else(|| "Invalid format".to_string());
            rules.push(Rule::new(move |v: &String| v.is_empty() || pattern.is_match(v), message).named("pattern"));
        }

        rules
    }

    /// Field options carrying these rules plus `extra` rules after them.
    pub fn into_field_options(self, extra: Vec<Rule<String>>) -> FieldOptions<String> {
        let mut options = FieldOptions::new()
            .required(self.required)
            .validate_on_change(self.validate_on_change)
            .with_rules(self.rules())
            .with_rules(extra);
        if let Some(message) = self.required_message {
            options = options.required_message(message);
        }
        if let Some(delay) = self.debounce {
            options = options.debounce(delay);
        }
        options
    }
}

/// Generic text validator.
pub fn text(initial: impl Into<String>, options: TextOptions) -> FieldValidator<String> {
    FieldValidator::new(initial.into(), options.into_field_options(Vec::new()))
}

/// E-mail validator.
pub fn email(initial: impl Into<String>, options: TextOptions) -> FieldValidator<String> {
    let rule = Rule::new(|v: &String| is_email(v), "Invalid email address").named("email");
    FieldValidator::new(initial.into(), options.into_field_options(vec![rule]))
}

/// Thai phone number validator.
pub fn thai_phone(initial: impl Into<String>, options: TextOptions) -> FieldValidator<String> {
    let rule = Rule::new(|v: &String| is_thai_phone(v), "Invalid phone number").named("thai_phone");
    FieldValidator::new(initial.into(), options.into_field_options(vec![rule]))
}

/// URL validator (`http`/`https` only).
pub fn url(initial: impl Into<String>, options: TextOptions) -> FieldValidator<String> {
    let rule = Rule::new(|v: &String| is_url(v), "Invalid URL").named("url");
    FieldValidator::new(initial.into(), options.into_field_options(vec![rule]))
}
