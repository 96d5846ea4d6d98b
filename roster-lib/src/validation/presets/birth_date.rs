//! Birth date validator.

use chrono::Local;
use chrono::NaiveDate;

use crate::format::{calculate_age, parse_date};
use crate::validation::{FieldOptions, FieldValidator, Rule};

/// Default earliest accepted birth date (1900-01-01).
pub fn default_min_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Default maximum age in years.
pub const DEFAULT_MAX_AGE: u32 = 150;

/// Options for [`birth_date`].
#[derive(Debug, Clone)]
pub struct BirthDateOptions {
    /// Whether the field is required.
    ///
    /// Default: `true`
    pub required: bool,
    /// Earliest accepted date (inclusive).
    ///
    /// Default: 1900-01-01
    pub min_date: NaiveDate,
    /// Latest accepted date (inclusive). `None` means today.
    pub max_date: Option<NaiveDate>,
    /// Minimum age in whole years.
    pub min_age: Option<u32>,
    /// Maximum age in whole years.
    ///
    /// Default: 150
    pub max_age: u32,
    /// Validate before the first touch.
    pub validate_on_change: bool,
    /// Reference date for "today". `None` uses the local date at validation time.
    pub today: Option<NaiveDate>,
}

impl Default for BirthDateOptions {
    fn default() -> Self {
        Self {
            required: true,
            min_date: default_min_birth_date(),
            max_date: None,
            min_age: None,
            max_age: DEFAULT_MAX_AGE,
            validate_on_change: false,
            today: None,
        }
    }
}

impl BirthDateOptions {
    /// Sets whether the field is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the minimum age.
    pub fn with_min_age(mut self, years: u32) -> Self {
        self.min_age = Some(years);
        self
    }

    /// Sets the maximum age.
    pub fn with_max_age(mut self, years: u32) -> Self {
        self.max_age = years;
        self
    }

    /// Sets the earliest accepted date.
    pub fn with_min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = date;
        self
    }

    /// Sets the latest accepted date.
    pub fn with_max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    /// Pins the reference date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Sets whether to validate before the first touch.
    pub fn with_validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }
}

fn today(pinned: Option<NaiveDate>) -> NaiveDate {
    pinned.unwrap_or_else(|| Local::now().date_naive())
}

/// Applies `check` to a parseable date; unparseable input passes because the
/// first rule already rejects it.
fn on_date(v: &str, check: impl Fn(NaiveDate) -> bool) -> bool {
    parse_date(v).is_none_or(check)
}

/// Rules for a birth date given as `YYYY-MM-DD`.
///
/// In order: parseable, strictly in the past, not after the maximum date,
/// minimum age, maximum age, not before the minimum date.
pub fn birth_date_rules(options: &BirthDateOptions) -> Vec<Rule<String>> {
    let pinned = options.today;
    let max_date = options.max_date;
    let min_date = options.min_date;
    let max_age = options.max_age;

    let mut rules = vec![
        Rule::new(|v: &String| parse_date(v).is_some(), "Invalid date").named("birth_date_format"),
        Rule::new(
            move |v: &String| on_date(v, |date| date < today(pinned)),
            "Birth date must be in the past",
        )
        .named("birth_date_past"),
        Rule::new(
            move |v: &String| on_date(v, |date| date <= max_date.unwrap_or_else(|| today(pinned))),
            match max_date {
                Some(date) => format!("Birth date cannot be after {}", date.format("%Y-%m-%d")),
                None => "Birth date cannot be after today".to_string(),
            },
        )
        .named("birth_date_max"),
    ];

    if let Some(min_age) = options.min_age {
        rules.push(
            Rule::new(
                move |v: &String| on_date(v, |date| calculate_age(date, today(pinned)) >= min_age as i32),
                format!("Must be at least {} years old", min_age),
            )
            .named("birth_date_min_age"),
        );
    }

    rules.push(
        Rule::new(
            move |v: &String| on_date(v, |date| calculate_age(date, today(pinned)) <= max_age as i32),
            format!("Age cannot exceed {} years", max_age),
        )
        .named("birth_date_max_age"),
    );

    rules.push(
        Rule::new(
            move |v: &String| on_date(v, |date| date >= min_date),
            format!("Birth date cannot be before {}", min_date.format("%Y-%m-%d")),
        )
        .named("birth_date_min"),
    );

    rules
}

/// Validator for a birth date.
pub fn birth_date(initial: impl Into<String>, options: BirthDateOptions) -> FieldValidator<String> {
    let field_options = FieldOptions::new()
        .required(options.required)
        .required_message("Birth date is required")
        .validate_on_change(options.validate_on_change)
        .with_rules(birth_date_rules(&options));
    FieldValidator::new(initial.into(), field_options)
}
