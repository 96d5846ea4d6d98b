//! Thai citizen ID and phone number helpers.

/// Number of digits in a Thai citizen ID.
pub const THAI_ID_LENGTH: usize = 13;

/// Keep only ASCII digits.
pub fn clean_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check digit for the first twelve digits of a Thai citizen ID.
///
/// Each digit is weighted by `13 - position`; the check digit is
/// `(11 - sum % 11) % 10`. Returns `None` unless given exactly twelve digits.
pub fn thai_id_checksum_digit(first_twelve: &str) -> Option<u32> {
    if first_twelve.len() != THAI_ID_LENGTH - 1 {
        return None;
    }
    let mut sum = 0;
    for (position, ch) in first_twelve.chars().enumerate() {
        let digit = ch.to_digit(10)?;
        sum += digit * (THAI_ID_LENGTH as u32 - position as u32);
    }
    Some((11 - sum % 11) % 10)
}

/// Validate a Thai citizen ID, ignoring separators.
///
/// # Example
///
/// ```
/// use roster_lib::format::is_valid_thai_id;
///
/// assert!(is_valid_thai_id("1-2345-67890-12-1"));
/// assert!(!is_valid_thai_id("1234567890122"));
/// ```
pub fn is_valid_thai_id(input: &str) -> bool {
    let digits = clean_digits(input);
    if digits.len() != THAI_ID_LENGTH {
        return false;
    }
    let (body, check) = digits.split_at(THAI_ID_LENGTH - 1);
    match (thai_id_checksum_digit(body), check.chars().next().and_then(|c| c.to_digit(10))) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

/// Format a Thai citizen ID as `X-XXXX-XXXXX-XX-X`.
///
/// Inputs that do not contain exactly thirteen digits are returned unchanged.
pub fn format_thai_id(input: &str) -> String {
    let digits = clean_digits(input);
    if digits.len() != THAI_ID_LENGTH {
        return input.to_string();
    }
    format!(
        "{}-{}-{}-{}-{}",
        &digits[0..1],
        &digits[1..5],
        &digits[5..10],
        &digits[10..12],
        &digits[12..13]
    )
}

/// Format a Thai phone number.
///
/// Ten-digit mobile numbers become `0XX-XXX-XXXX`, nine-digit Bangkok
/// landlines `02-XXX-XXXX` and other nine-digit landlines `0XX-XXX-XXX`.
/// Anything else is returned unchanged.
pub fn format_thai_phone(input: &str) -> String {
    let digits = clean_digits(input);
    match digits.len() {
        10 => format!("{}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
        9 if digits.starts_with("02") => {
            format!("{}-{}-{}", &digits[0..2], &digits[2..5], &digits[5..9])
        }
        9 => format!("{}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..9]),
        _ => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_known_value() {
        assert_eq!(thai_id_checksum_digit("123456789012"), Some(1));
        assert_eq!(thai_id_checksum_digit("12345"), None);
        assert_eq!(thai_id_checksum_digit("12345678901x"), None);
    }

    #[test]
    fn test_valid_and_altered_last_digit() {
        assert!(is_valid_thai_id("1234567890121"));
        for last in ['0', '2', '3', '9'] {
            let altered = format!("123456789012{}", last);
            assert!(!is_valid_thai_id(&altered), "{} should fail", altered);
        }
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_thai_id("1234567890121"), "1-2345-67890-12-1");
        assert_eq!(format_thai_id("12345"), "12345");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_thai_phone("0812345678"), "081-234-5678");
        assert_eq!(format_thai_phone("021234567"), "02-123-4567");
        assert_eq!(format_thai_phone("053123456"), "053-123-456");
        assert_eq!(format_thai_phone("12"), "12");
    }
}
