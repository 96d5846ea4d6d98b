//! Form-level aggregation of field validators.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::join_all;

use super::{FieldError, Validatable, ValidationResult};

/// Derived snapshot of a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Every field is valid.
    pub is_valid: bool,
    /// At least one field is validating.
    pub is_validating: bool,
    /// Non-empty errors by field name.
    pub errors: BTreeMap<String, String>,
}

/// A named set of field validators.
///
/// The form never stores validity of its own: `is_valid`, `is_validating`
/// and the error map are always recomputed from the fields. Cloning shares
/// the fields.
///
/// # Example
///
/// ```ignore
/// let form = FormValidator::new()
///     .field("citizen_id", presets::thai_citizen_id("", FieldOptions::new().required(true)))
///     .field("birth_date", presets::birth_date("", BirthDateOptions::default()));
///
/// if form.submit().await.is_valid() {
///     // send the form
/// }
/// ```
#[derive(Clone, Default)]
pub struct FormValidator {
    fields: Vec<(String, Arc<dyn Validatable>)>,
}

impl FormValidator {
    /// Create an empty form.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field; a field with the same name is replaced.
    pub fn field(mut self, name: impl Into<String>, validator: impl Validatable + 'static) -> Self {
        self.insert(name, Arc::new(validator));
        self
    }

    /// Add an already shared field; a field with the same name is replaced.
    pub fn insert(&mut self, name: impl Into<String>, validator: Arc<dyn Validatable>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = validator,
            None => self.fields.push((name, validator)),
        }
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Validatable>> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, field)| field)
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate every field concurrently. True iff all fields are valid.
    pub async fn validate(&self) -> bool {
        join_all(self.fields.iter().map(|(_, field)| field.validate()))
            .await
            .into_iter()
            .all(|valid| valid)
    }

    /// Touch every field concurrently. True iff all fields are valid.
    pub async fn touch_all(&self) -> bool {
        join_all(self.fields.iter().map(|(_, field)| field.touch()))
            .await
            .into_iter()
            .all(|valid| valid)
    }

    /// Touch and validate everything, collecting errors in field order.
    ///
    /// Use this to gate submission: untouched fields are evaluated too.
    pub async fn submit(&self) -> ValidationResult {
        if self.touch_all().await {
            return ValidationResult::Valid;
        }
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|(name, field)| {
                field.error().map(|message| FieldError {
                    field_name: name.clone(),
                    message,
                })
            })
            .collect();

        if errors.is_empty() {
            // Invalid results that were superseded by newer runs.
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Reset every field.
    pub fn reset(&self) {
        for (_, field) in &self.fields {
            field.reset();
        }
    }

    /// Errors of all fields with a non-empty error.
    pub fn get_errors(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|(name, field)| field.error().map(|error| (name.clone(), error)))
            .collect()
    }

    /// True iff every field is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, field)| field.is_valid())
    }

    /// True iff any field is validating.
    pub fn is_validating(&self) -> bool {
        self.fields.iter().any(|(_, field)| field.is_validating())
    }

    /// Snapshot of the derived form state.
    pub fn state(&self) -> FormState {
        FormState {
            is_valid: self.is_valid(),
            is_validating: self.is_validating(),
            errors: self.get_errors(),
        }
    }
}
