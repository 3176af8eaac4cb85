//! End-to-end tests for a small teaching-package validation pipeline.

use turnstile::{
    assert_fails, assert_fails_with, assert_passes, check, check_against, checker, checker_against,
    CheckError, Registry,
};

/// The dynamically-typed values a teaching DSL hands around.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Num(f64),
    Str(String),
}

fn character_checker() -> turnstile::Checker<Value> {
    checker(
        |v: &Value| matches!(v, Value::Str(_)),
        "'%s' must be a character.",
    )
}

#[test]
fn character_check_rejects_a_numeric_count_by_name() {
    let check_character = character_checker();
    let count = Value::Num(3.0);
    let err = check!(check_character, count).unwrap_err();
    assert!(err.to_string().contains("count"));
    assert_eq!(err.to_string(), "'count' must be a character.");
}

#[test]
fn character_check_passes_a_string_through() {
    let check_character = character_checker();
    let greeting = Value::Str(String::from("hello"));
    assert_eq!(
        check!(check_character, greeting),
        Ok(Value::Str(String::from("hello")))
    );
}

#[test]
fn membership_failure_names_both_the_value_expression_and_the_reference() {
    let check_among = checker_against(
        |x: &&str, allowed: &Vec<&str>| allowed.contains(x),
        "'%s' is not among %s",
    );
    let hosts = vec!["Alice", "Bob", "Carl"];

    let err = check_against!(check_among, "Robert", hosts).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Robert"));
    assert!(message.contains("(\"Alice\", \"Bob\", \"Carl\")"));

    assert_eq!(check_against!(check_among, "Carl", hosts), Ok("Carl"));
}

#[test]
fn missing_reference_beats_a_passing_predicate() {
    let check_among = checker_against(
        |x: &&str, allowed: &Vec<&str>| allowed.contains(x),
        "'%s' is not among %s",
    );
    let err = check_among.check_opt("Carl", "host", None).unwrap_err();
    assert!(err.is_missing_reference());
}

/// A function validated the way an exported teaching function would be.
fn plot_symbol(pch: String, size: f64) -> Result<(String, f64), CheckError> {
    let check_one_char = checker(
        |s: &String| s.chars().count() == 1,
        "'%s' must be length == 1",
    );
    let check_positive = checker(|x: &f64| *x > 0.0, "'%s' must be positive.");

    let pch = check!(check_one_char, pch)?;
    let size = check!(check_positive, size)?;
    Ok((pch, size))
}

#[test]
fn validated_function_passes_good_arguments_through() {
    assert_eq!(
        plot_symbol(String::from("x"), 1.5),
        Ok((String::from("x"), 1.5))
    );
}

#[test]
fn validated_function_fails_fast_on_the_first_bad_argument() {
    let err = plot_symbol(String::from("xy"), -1.0).unwrap_err();
    assert_eq!(err.to_string(), "'pch' must be length == 1");

    let err = plot_symbol(String::from("x"), -1.0).unwrap_err();
    assert_eq!(err.to_string(), "'size' must be positive.");
}

fn string_registry() -> Registry<String> {
    let mut registry = Registry::new();
    registry.insert(
        "check_nonempty",
        checker(|s: &String| !s.is_empty(), "'%s' must be a nonempty string."),
    );
    registry.insert(
        "check_lower",
        checker(
            |s: &String| s.chars().all(|c| !c.is_uppercase()),
            "'%s' must be lowercase.",
        ),
    );
    registry.insert(
        "check_among",
        checker_against(
            |x: &String, allowed: &Vec<&str>| allowed.contains(&x.as_str()),
            "'%s' is not among %s",
        )
        .bind(vec!["small", "medium", "large"]),
    );
    registry
}

#[test]
fn registry_pipeline_threads_the_value_through() {
    let registry = string_registry();
    let size = registry
        .apply(String::from("medium"), "size", &["nonempty", "lower", "among"])
        .unwrap();
    assert_eq!(size, "medium");
}

#[test]
fn registry_pipeline_fails_with_the_first_offending_check() {
    let registry = string_registry();

    assert_fails_with!(
        registry.apply(String::new(), "size", &["nonempty", "lower", "among"]),
        "'size' must be a nonempty string."
    );
    assert_fails_with!(
        registry.apply(String::from("huge"), "size", &["nonempty", "lower", "among"]),
        "'size' is not among (\"small\", \"medium\", \"large\")"
    );
}

#[test]
fn registry_failure_is_exactly_the_direct_failure() {
    let registry = string_registry();
    let check_lower = checker(
        |s: &String| s.chars().all(|c| !c.is_uppercase()),
        "'%s' must be lowercase.",
    );

    let direct = check_lower.check(String::from("Big"), "size").unwrap_err();
    let sequenced = registry
        .apply(String::from("Big"), "size", &["nonempty", "lower"])
        .unwrap_err();
    assert_eq!(direct, sequenced);
}

#[test]
fn unknown_check_name_reports_the_expanded_name() {
    let registry = string_registry();
    let err = registry
        .apply(String::from("ok"), "size", &["nonempty", "trimmed"])
        .unwrap_err();
    assert!(err.is_unknown_checker());
    assert_eq!(
        err.to_string(),
        "no checker named `check_trimmed` is registered"
    );
}

#[test]
fn callers_can_label_failures_with_context() {
    let registry = string_registry();
    let err = registry
        .apply(String::from("HUGE"), "size", &["lower"])
        .unwrap_err()
        .context("validating plot arguments");

    let rendered = err.to_string();
    assert!(rendered.contains("'size' must be lowercase."));
    assert!(rendered.contains("-> validating plot arguments"));
}

#[test]
fn assertion_macros_read_naturally_in_package_tests() {
    let check_nonempty = checker(|s: &String| !s.is_empty(), "'%s' must be nonempty.");
    assert_passes!(check_nonempty.check(String::from("ok"), "label"));
    assert_fails!(check_nonempty.check(String::new(), "label"));
}
