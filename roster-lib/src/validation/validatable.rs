//! Validatable trait for fields that can join a form.

use async_trait::async_trait;

use super::{Blank, FieldState, FieldValidator};

/// Type-erased view of a field validator.
///
/// [`FormValidator`](super::FormValidator) holds fields of different value
/// types through this trait.
#[async_trait]
pub trait Validatable: Send + Sync {
    /// Validate the current value.
    async fn validate(&self) -> bool;

    /// Mark as touched and validate.
    async fn touch(&self) -> bool;

    /// Reset status and cancel pending validation.
    fn reset(&self);

    /// Snapshot of the validation status.
    fn state(&self) -> FieldState;

    /// Set a validation error on this field.
    fn set_error(&self, message: String);

    /// Clear the validation error.
    fn clear_error(&self);

    /// Get the current validation error message (if any).
    fn error(&self) -> Option<String> {
        let error = self.state().error;
        (!error.is_empty()).then_some(error)
    }

    /// Check if the field has no validation error.
    fn is_valid(&self) -> bool {
        self.state().is_valid()
    }

    /// Check if a validation run is in flight.
    fn is_validating(&self) -> bool {
        self.state().is_validating
    }
}

#[async_trait]
impl<V: Blank + Clone + Send + Sync + 'static> Validatable for FieldValidator<V> {
    async fn validate(&self) -> bool {
        FieldValidator::validate(self).await
    }

    async fn touch(&self) -> bool {
        FieldValidator::touch(self).await
    }

    fn reset(&self) {
        FieldValidator::reset(self)
    }

    fn state(&self) -> FieldState {
        FieldValidator::state(self)
    }

    fn set_error(&self, message: String) {
        FieldValidator::set_error(self, message)
    }

    fn clear_error(&self) {
        FieldValidator::clear_error(self)
    }
}
