//! `roster validate`: run a form of preset validators from a JSON file.
//!
//! ```json
//! {
//!   "citizen_id": { "preset": "thai-id", "value": "1-2345-67890-12-1" },
//!   "birth_date": { "preset": "birth-date", "value": "1990-03-01", "minAge": 18 },
//!   "email": { "preset": "email", "value": "somchai@example.com", "required": false }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use regex::Regex;
use roster_lib::validation::presets::{self, BirthDateOptions, TextOptions};
use roster_lib::validation::{FieldOptions, FieldValidator, FormValidator, ValidationResult};
use serde::Deserialize;

use super::read_json;
use crate::error::CliError;

fn required_by_default() -> bool {
    true
}

/// One form field: a preset name plus its options.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "preset", rename_all = "kebab-case")]
pub enum FieldSpec {
    ThaiId(IdSpec),
    BirthDate(BirthDateSpec),
    Email(TextSpec),
    Phone(TextSpec),
    Url(TextSpec),
    Text(TextSpec),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdSpec {
    #[serde(default)]
    pub value: String,
    #[serde(default = "required_by_default")]
    pub required: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDateSpec {
    #[serde(default)]
    pub value: String,
    #[serde(default = "required_by_default")]
    pub required: bool,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpec {
    #[serde(default)]
    pub value: String,
    #[serde(default = "required_by_default")]
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    pub pattern_message: Option<String>,
}

impl TextSpec {
    fn options(&self, field: &str) -> Result<TextOptions, CliError> {
        let mut options = TextOptions::new().with_required(self.required);
        if let Some(min) = self.min_length {
            options = options.with_min_length(min);
        }
        if let Some(max) = self.max_length {
            options = options.with_max_length(max);
        }
        if let Some(pattern) = &self.pattern {
            let regex = Regex::new(pattern).map_err(|source| CliError::Pattern {
                field: field.to_string(),
                source,
            })?;
            let message = self.pattern_message.clone().unwrap_or_else(|| "Invalid format".into());
            options = options.with_pattern(regex, message);
        }
        Ok(options)
    }
}

impl FieldSpec {
    /// Build the validator for the field called `name`.
    pub fn build(&self, name: &str) -> Result<FieldValidator<String>, CliError> {
        let validator = match self {
            FieldSpec::ThaiId(spec) => {
                presets::thai_citizen_id(spec.value.as_str(), FieldOptions::new().required(spec.required))
            }
            FieldSpec::BirthDate(spec) => {
                let mut options = BirthDateOptions::default().with_required(spec.required);
                if let Some(years) = spec.min_age {
                    options = options.with_min_age(years);
                }
                if let Some(years) = spec.max_age {
                    options = options.with_max_age(years);
                }
                presets::birth_date(spec.value.as_str(), options)
            }
            FieldSpec::Email(spec) => presets::email(spec.value.as_str(), spec.options(name)?),
            FieldSpec::Phone(spec) => presets::thai_phone(spec.value.as_str(), spec.options(name)?),
            FieldSpec::Url(spec) => presets::url(spec.value.as_str(), spec.options(name)?),
            FieldSpec::Text(spec) => presets::text(spec.value.as_str(), spec.options(name)?),
        };
        Ok(validator)
    }
}

/// Build a form from field specs, in name order.
pub fn build_form(specs: &BTreeMap<String, FieldSpec>) -> Result<FormValidator, CliError> {
    let mut form = FormValidator::new();
    for (name, spec) in specs {
        form = form.field(name.clone(), spec.build(name)?);
    }
    Ok(form)
}

/// Submit the form and report each field.
pub async fn check(specs: &BTreeMap<String, FieldSpec>) -> Result<String, CliError> {
    let form = build_form(specs)?;
    let result = form.submit().await;
    let errors = form.get_errors();

    let mut out = String::new();
    for name in form.names() {
        match errors.get(name) {
            Some(error) => out.push_str(&format!("{}: {}\n", name, error)),
            None => out.push_str(&format!("{}: ok\n", name)),
        }
    }

    match result {
        ValidationResult::Valid => Ok(out),
        ValidationResult::Invalid(errors) => {
            log::info!("Form rejected: {} invalid field(s)", errors.len());
            Err(CliError::Invalid {
                count: errors.len(),
                report: out,
            })
        }
    }
}

pub async fn run(path: &Path) -> Result<String, CliError> {
    let specs = serde_json::from_value(read_json(path)?).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    check(&specs).await
}
