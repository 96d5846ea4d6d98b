//! Validation predicates shared by validator presets.

use std::sync::LazyLock;

use regex::Regex;

static THAI_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0(?:[689]\d{8}|[2-7]\d{7})$").expect("static phone pattern is valid")
});

/// Valid e-mail address.
pub fn is_email(input: &str) -> bool {
    email_address::EmailAddress::is_valid(input.trim())
}

/// Thai mobile (`06`, `08`, `09` + 8 digits) or landline (9 digits) number.
///
/// Spaces and dashes are ignored.
pub fn is_thai_phone(input: &str) -> bool {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    THAI_PHONE.is_match(&compact)
}

/// Absolute `http`/`https` URL with a host.
pub fn is_url(input: &str) -> bool {
    match url::Url::parse(input.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_email("somchai@example.co.th"));
        assert!(!is_email("somchai@"));
    }

    #[test]
    fn test_thai_phone() {
        assert!(is_thai_phone("081-234-5678"));
        assert!(is_thai_phone("02 123 4567"));
        assert!(!is_thai_phone("0112345678"));
        assert!(!is_thai_phone("81234567"));
    }

    #[test]
    fn test_url() {
        assert!(is_url("https://egat.co.th/path"));
        assert!(!is_url("ftp://egat.co.th"));
        assert!(!is_url("not a url"));
    }
}
