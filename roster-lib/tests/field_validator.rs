//! Tests for the single-field validator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use roster_lib::validation::{
    DEFAULT_REQUIRED_MESSAGE, FieldOptions, FieldValidator, Rule, VALIDATION_ERROR_MESSAGE,
};

fn counting_rule(counter: &Arc<AtomicUsize>) -> Rule<String> {
    let counter = Arc::clone(counter);
    Rule::new(
        move |v: &String| {
            counter.fetch_add(1, Ordering::SeqCst);
            v.len() >= 3
        },
        "Too short",
    )
}

#[tokio::test]
async fn test_validate_before_touch_is_a_no_op() {
    let runs = Arc::new(AtomicUsize::new(0));
    let field = FieldValidator::new("ab".to_string(), FieldOptions::new().rule(counting_rule(&runs)));

    assert!(field.validate().await);
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert!(!field.touched());
    assert!(field.is_valid());

    assert!(!field.touch().await);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert!(field.touched());
    assert_eq!(field.error(), "Too short");
}

#[tokio::test]
async fn test_required_empty_uses_required_message() {
    let always_ok = Rule::new(|_: &String| true, "never shown");
    let field = FieldValidator::new("   ".to_string(), FieldOptions::new().required(true).rule(always_ok.clone()));
    assert!(!field.touch().await);
    assert_eq!(field.error(), DEFAULT_REQUIRED_MESSAGE);

    let custom = FieldValidator::new(
        String::new(),
        FieldOptions::new()
            .required(true)
            .required_message("Please enter a name")
            .rule(always_ok),
    );
    custom.touch().await;
    assert_eq!(custom.error(), "Please enter a name");
}

#[tokio::test]
async fn test_optional_empty_skips_rules() {
    let runs = Arc::new(AtomicUsize::new(0));
    let field = FieldValidator::new(String::new(), FieldOptions::new().rule(counting_rule(&runs)));
    assert!(field.touch().await);
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_custom_is_empty() {
    let field = FieldValidator::new(
        "0".to_string(),
        FieldOptions::new().required(true).is_empty(|v: &String| v == "0"),
    );
    assert!(!field.touch().await);
    assert_eq!(field.error(), DEFAULT_REQUIRED_MESSAGE);
}

#[tokio::test]
async fn test_first_failing_rule_wins() {
    let later = Arc::new(AtomicUsize::new(0));
    let field = FieldValidator::new(
        "x".to_string(),
        FieldOptions::new()
            .rule(Rule::new(|v: &String| v.len() > 5, "First"))
            .rule(counting_rule(&later)),
    );
    field.touch().await;
    assert_eq!(field.error(), "First");
    assert_eq!(later.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_async_rule() {
    let field = FieldValidator::new(
        "taken".to_string(),
        FieldOptions::new().rule(Rule::new_async(
            |v: String| async move {
                tokio::task::yield_now().await;
                v != "taken"
            },
            "Username is already taken",
        )),
    );
    assert!(!field.touch().await);
    assert_eq!(field.error(), "Username is already taken");
    assert!(!field.is_validating());
}

#[tokio::test]
async fn test_rule_error_and_panic_are_contained() {
    let failing = FieldValidator::new(
        "abc".to_string(),
        FieldOptions::new().rule(Rule::try_new(|_: &String| Err::<bool, _>("service unavailable"), "unused")),
    );
    assert!(!failing.touch().await);
    assert_eq!(failing.error(), VALIDATION_ERROR_MESSAGE);
    assert!(!failing.is_validating());

    let panicking = FieldValidator::new(
        "abc".to_string(),
        FieldOptions::new().rule(Rule::new(|_: &String| -> bool { panic!("boom") }, "unused")),
    );
    assert!(!panicking.touch().await);
    assert_eq!(panicking.error(), VALIDATION_ERROR_MESSAGE);
    assert!(!panicking.is_validating());
}

#[tokio::test]
async fn test_reset_and_manual_errors() {
    let field = FieldValidator::new("x".to_string(), FieldOptions::new().rule(Rule::new(|v: &String| v.len() > 3, "Too short")));
    field.touch().await;
    assert!(!field.is_valid());

    field.reset();
    let state = field.state();
    assert!(state.is_valid());
    assert!(!state.touched);
    assert!(!state.is_validating);

    field.set_error("Rejected by server");
    assert_eq!(field.error(), "Rejected by server");
    assert!(!field.is_valid());
    field.clear_error();
    assert!(field.is_valid());
}

#[tokio::test]
async fn test_change_ignored_until_touched() {
    let runs = Arc::new(AtomicUsize::new(0));
    let field = FieldValidator::new(String::new(), FieldOptions::new().rule(counting_rule(&runs)));

    field.set_value("ab".to_string()).await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert!(field.is_valid());

    field.touch().await;
    field.set_value("abcd".to_string()).await;
    assert_eq!(runs.load(Ordering::SeqCst), 2);
    assert!(field.is_valid());
}

#[tokio::test]
async fn test_validate_on_change_before_touch() {
    let runs = Arc::new(AtomicUsize::new(0));
    let field = FieldValidator::new(
        String::new(),
        FieldOptions::new().validate_on_change(true).rule(counting_rule(&runs)),
    );
    field.set_value("ab".to_string()).await;
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(field.error(), "Too short");
    assert!(!field.touched());
}

#[tokio::test(start_paused = true)]
async fn test_debounce_validates_once_with_latest_value() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let field = FieldValidator::new(
        String::new(),
        FieldOptions::new()
            .validate_on_change(true)
            .debounce(Duration::from_millis(300))
            .rule(Rule::new(
                move |v: &String| {
                    log.lock().unwrap().push(v.clone());
                    v.len() >= 3
                },
                "Too short",
            )),
    );

    field.set_value("ab".to_string()).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    field.set_value("abcd".to_string()).await;
    assert!(seen.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(*seen.lock().unwrap(), vec!["abcd".to_string()]);
    assert!(field.is_valid());
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_pending_debounce() {
    let runs = Arc::new(AtomicUsize::new(0));
    let field = FieldValidator::new(
        String::new(),
        FieldOptions::new()
            .validate_on_change(true)
            .debounce(Duration::from_millis(200))
            .rule(counting_rule(&runs)),
    );
    field.set_value("ab".to_string()).await;
    field.reset();
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert!(field.is_valid());
}

#[tokio::test(start_paused = true)]
async fn test_stale_result_is_discarded() {
    let field = FieldValidator::new(
        String::new(),
        FieldOptions::new().validate_on_change(true).rule(Rule::new_async(
            |v: String| async move {
                let delay = if v == "slow" { 500 } else { 10 };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                v != "slow"
            },
            "Rejected",
        )),
    );

    let slow = tokio::spawn({
        let field = field.clone();
        async move { field.set_value("slow".to_string()).await }
    });
    tokio::time::sleep(Duration::from_millis(1)).await;

    field.set_value("fast".to_string()).await;
    assert!(field.is_valid());

    slow.await.unwrap();
    assert!(field.is_valid());
    assert_eq!(field.value(), "fast");
    assert!(!field.is_validating());
}

#[tokio::test(start_paused = true)]
async fn test_external_error_survives_in_flight_validation() {
    let field = FieldValidator::new(
        "somchai".to_string(),
        FieldOptions::new().validate_on_change(true).rule(Rule::new_async(
            |_: String| async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                true
            },
            "Rejected",
        )),
    );

    let running = tokio::spawn({
        let field = field.clone();
        async move { field.validate().await }
    });
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert!(field.is_validating());

    field.set_error("Username already taken");
    assert!(!field.is_validating());

    running.await.unwrap();
    assert_eq!(field.error(), "Username already taken");
    assert!(!field.is_valid());
    assert!(!field.is_validating());
}
