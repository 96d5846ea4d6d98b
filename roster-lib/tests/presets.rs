//! Tests for the ready-made validators.

use chrono::NaiveDate;
use regex::Regex;
use roster_lib::validation::FieldOptions;
use roster_lib::validation::presets::{
    BirthDateOptions, THAI_ID_CHECKSUM_MESSAGE, TextOptions, birth_date, email, text, thai_citizen_id, thai_phone,
    url,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[tokio::test]
async fn test_thai_id_valid_checksum() {
    let field = thai_citizen_id("1234567890121", FieldOptions::new().required(true));
    assert!(field.touch().await);

    let dashed = thai_citizen_id("1-2345-67890-12-1", FieldOptions::new());
    assert!(dashed.touch().await);
}

#[tokio::test]
async fn test_thai_id_altered_last_digit() {
    let field = thai_citizen_id("1234567890122", FieldOptions::new());
    assert!(!field.touch().await);
    assert_eq!(field.error(), THAI_ID_CHECKSUM_MESSAGE);
}

#[tokio::test]
async fn test_thai_id_length_reports_count() {
    let field = thai_citizen_id("12345", FieldOptions::new());
    assert!(!field.touch().await);
    assert_eq!(field.error(), "Citizen ID must be 13 digits (got 5)");

    let noisy = thai_citizen_id("12-34-ab", FieldOptions::new());
    noisy.touch().await;
    assert_eq!(noisy.error(), "Citizen ID must be 13 digits (got 4)");
}

#[tokio::test]
async fn test_birth_date_tomorrow() {
    let field = birth_date("2024-06-16", BirthDateOptions::default().with_today(today()));
    assert!(!field.touch().await);
    assert_eq!(field.error(), "Birth date must be in the past");

    let today_itself = birth_date("2024-06-15", BirthDateOptions::default().with_today(today()));
    assert!(!today_itself.touch().await);
}

#[tokio::test]
async fn test_birth_date_too_old() {
    let field = birth_date("1824-06-15", BirthDateOptions::default().with_today(today()));
    assert!(!field.touch().await);
    assert_eq!(field.error(), "Age cannot exceed 150 years");
}

#[tokio::test]
async fn test_birth_date_min_age() {
    let adult = birth_date("2004-06-15", BirthDateOptions::default().with_today(today()).with_min_age(18));
    assert!(adult.touch().await);

    let child = birth_date("2014-06-15", BirthDateOptions::default().with_today(today()).with_min_age(18));
    assert!(!child.touch().await);
    assert_eq!(child.error(), "Must be at least 18 years old");
}

#[tokio::test]
async fn test_birth_date_age_respects_day_of_year() {
    // Turns 18 tomorrow.
    let field = birth_date("2006-06-16", BirthDateOptions::default().with_today(today()).with_min_age(18));
    assert!(!field.touch().await);
}

#[tokio::test]
async fn test_birth_date_bounds_and_format() {
    let invalid = birth_date("15/06/2000", BirthDateOptions::default().with_today(today()));
    invalid.touch().await;
    assert_eq!(invalid.error(), "Invalid date");

    let required = birth_date("", BirthDateOptions::default().with_today(today()));
    required.touch().await;
    assert_eq!(required.error(), "Birth date is required");

    let optional = birth_date("", BirthDateOptions::default().with_required(false));
    assert!(optional.touch().await);

    let min_date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    let early = birth_date(
        "1949-12-31",
        BirthDateOptions::default().with_today(today()).with_min_date(min_date),
    );
    early.touch().await;
    assert_eq!(early.error(), "Birth date cannot be before 1950-01-01");

    let max_date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let late = birth_date(
        "2021-01-01",
        BirthDateOptions::default().with_today(today()).with_max_date(max_date),
    );
    late.touch().await;
    assert_eq!(late.error(), "Birth date cannot be after 2020-01-01");
}

#[tokio::test]
async fn test_text_lengths_only_apply_to_non_empty() {
    let options = TextOptions::new().with_min_length(3).with_max_length(5);
    assert!(text("", options.clone()).touch().await);

    let short = text("ab", options.clone());
    short.touch().await;
    assert_eq!(short.error(), "Must be at least 3 characters");

    let long = text("abcdef", options);
    long.touch().await;
    assert_eq!(long.error(), "Must be at most 5 characters");
}

#[tokio::test]
async fn test_text_pattern() {
    let options = TextOptions::new().with_pattern(Regex::new(r"^[A-Z]{2}\d{4}$").unwrap(), "Use two letters and four digits");
    assert!(text("AB1234", options.clone()).touch().await);

    let bad = text("ab1234", options);
    bad.touch().await;
    assert_eq!(bad.error(), "Use two letters and four digits");
}

#[tokio::test]
async fn test_email_phone_url() {
    assert!(email("somchai@example.co.th", TextOptions::new()).touch().await);
    let bad_email = email("somchai@", TextOptions::new());
    bad_email.touch().await;
    assert_eq!(bad_email.error(), "Invalid email address");

    assert!(thai_phone("081-234-5678", TextOptions::new()).touch().await);
    let bad_phone = thai_phone("12345", TextOptions::new());
    bad_phone.touch().await;
    assert_eq!(bad_phone.error(), "Invalid phone number");

    assert!(url("https://www.egat.co.th", TextOptions::new()).touch().await);
    let bad_url = url("ftp://files.example", TextOptions::new());
    bad_url.touch().await;
    assert_eq!(bad_url.error(), "Invalid URL");
}
