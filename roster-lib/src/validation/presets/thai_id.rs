//! Thai citizen ID validator.

use crate::format::{THAI_ID_LENGTH, clean_digits, is_valid_thai_id};
use crate::validation::{FieldOptions, FieldValidator, Message, Rule};

/// Message for an ID with a wrong check digit.
pub const THAI_ID_CHECKSUM_MESSAGE: &str = "Invalid citizen ID";

/// Rules for a Thai citizen ID: 13 digits, then the checksum.
///
/// Separators are ignored. The checksum rule never runs when the length rule
/// fails.
pub fn thai_citizen_id_rules() -> Vec<Rule<String>> {
    vec![
        Rule::new(
            |v: &String| clean_digits(v).len() == THAI_ID_LENGTH,
            Message::from_fn(|v: &String| {
                format!(
                    "Citizen ID must be {} digits (got {})",
                    THAI_ID_LENGTH,
                    clean_digits(v).len()
                )
            }),
        )
        .named("thai_id_length"),
        Rule::new(|v: &String| is_valid_thai_id(v), THAI_ID_CHECKSUM_MESSAGE).named("thai_id_checksum"),
    ]
}

/// Validator for a Thai citizen ID.
///
/// The ID rules run before any rules already present in `options`.
pub fn thai_citizen_id(initial: impl Into<String>, options: FieldOptions<String>) -> FieldValidator<String> {
    FieldValidator::new(initial.into(), options.with_leading_rules(thai_citizen_id_rules()))
}
