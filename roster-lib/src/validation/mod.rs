//! Field and form validation.
//!
//! A [`FieldValidator`] owns one value plus its validation status
//! (`error`, `touched`, `is_validating`) and evaluates an ordered list of
//! [`Rule`]s against it; the first failing rule wins. A [`FormValidator`]
//! aggregates named fields and derives form-level validity from them.
//!
//! # Example
//!
//! ```ignore
//! use roster_lib::validation::{FieldOptions, FieldValidator, FormValidator, Rule};
//!
//! let name = FieldValidator::new(
//!     String::new(),
//!     FieldOptions::new()
//!         .required(true)
//!         .rule(Rule::new(|v: &String| v.chars().count() >= 2, "Name is too short")),
//! );
//!
//! let form = FormValidator::new().field("first_name", name.clone());
//! let result = form.submit().await;
//! assert!(result.is_invalid());
//! assert_eq!(name.error(), "This field is required");
//! ```

mod blank;
mod field;
mod form;
pub mod presets;
mod result;
mod rule;
mod validatable;

pub use blank::Blank;
pub use field::{
    DEFAULT_INVALID_MESSAGE, DEFAULT_REQUIRED_MESSAGE, FieldOptions, FieldState, FieldValidator,
    VALIDATION_ERROR_MESSAGE,
};
pub use form::{FormState, FormValidator};
pub use result::{FieldError, ValidationResult};
pub use rule::{BoxFuture, Message, Rule};
pub use validatable::Validatable;
