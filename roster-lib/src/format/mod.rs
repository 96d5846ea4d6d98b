//! Pure formatting helpers and value predicates.
//!
//! Everything here is free of state: column cells, validator presets and the
//! CLI all call into these functions.

mod date;
mod number;
mod predicates;
mod text;
mod thai;

pub use date::*;
pub use number::*;
pub use predicates::*;
pub use text::*;
pub use thai::*;

use serde::Deserialize;
use serde::Serialize;

/// Default placeholder shown for empty cells.
pub const DEFAULT_PLACEHOLDER: &str = "-";

/// Default decimal precision for number columns.
pub const DEFAULT_PRECISION: u32 = 2;

/// Display locale for dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Thai month names and Buddhist-era years.
    #[default]
    Th,
    /// English month names and Gregorian years.
    En,
}

/// Formatting configuration shared by column builders and the CLI.
///
/// # Example
///
/// ```
/// use roster_lib::format::{FormatOptions, Locale};
///
/// let options = FormatOptions::default()
///     .with_locale(Locale::En)
///     .with_placeholder("n/a");
/// assert_eq!(options.placeholder, "n/a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Locale used for dates.
    ///
    /// Default: `th`
    pub locale: Locale,

    /// Text shown for empty values.
    ///
    /// Default: `-`
    pub placeholder: String,

    /// ISO currency code for currency number columns.
    ///
    /// Default: `THB`
    pub currency: String,

    /// Offset from UTC, in minutes, used when displaying timestamps.
    ///
    /// Default: 420 (UTC+7, Asia/Bangkok)
    pub utc_offset_minutes: i32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: Locale::Th,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            currency: "THB".to_string(),
            utc_offset_minutes: 7 * 60,
        }
    }
}

impl FormatOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the empty-value placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the currency code.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the display offset from UTC in minutes.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }
}
