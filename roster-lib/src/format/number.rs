//! Number and currency formatting.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Insert `,` thousands separators into a run of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a decimal with a fixed number of fraction digits and thousands
/// separators. Midpoints round away from zero.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use roster_lib::format::format_decimal;
///
/// assert_eq!(format_decimal(Decimal::new(12345675, 3), 2), "12,345.68");
/// assert_eq!(format_decimal(Decimal::new(-5, 0), 0), "-5");
/// ```
pub fn format_decimal(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.*}", precision as usize, rounded.abs());

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Symbol for a currency code, if it has a well-known one.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "THB" => Some("฿"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Format a monetary amount with two fraction digits.
///
/// Known currencies use their symbol (`฿1,234.50`); others are prefixed with
/// the code (`SGD 1,234.50`).
pub fn format_currency(value: Decimal, code: &str) -> String {
    let amount = format_decimal(value.abs(), 2);
    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    match currency_symbol(code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, amount),
        None => format!("{}{} {}", sign, code.to_ascii_uppercase(), amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_decimal(Decimal::new(1234567, 0), 0), "1,234,567");
        assert_eq!(format_decimal(Decimal::new(999, 0), 2), "999.00");
        assert_eq!(format_decimal(Decimal::ZERO, 2), "0.00");
    }

    #[test]
    fn test_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_decimal(Decimal::new(-1, 3), 2), "0.00");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(Decimal::new(123450, 2), "THB"), "฿1,234.50");
        assert_eq!(format_currency(Decimal::new(-2500, 2), "usd"), "-$25.00");
        assert_eq!(format_currency(Decimal::new(10, 0), "SGD"), "SGD 10.00");
    }
}
