//! Boundary cases for the built-in rule factories.

use rstest::rstest;
use validkit::prelude::*;

// ── range ───────────────────────────────────────────────────────────────────

#[test]
fn range_boundaries_are_inclusive() {
    let rule = range(10..=20);
    assert!(rule.check(&10).is_ok());
    assert!(rule.check(&20).is_ok());
    assert!(rule.check(&9).is_err());
    assert!(rule.check(&21).is_err());
}

#[test]
fn range_failure_messages_name_the_violated_bound() {
    let rule = range(10..=20);
    assert_eq!(rule.check(&9).unwrap_err().to_string(), "is less than 10");
    assert_eq!(
        rule.check(&21).unwrap_err().to_string(),
        "is greater than 20"
    );
}

#[test]
fn half_open_ranges_skip_the_unbounded_side() {
    assert!(range(200..).check(&i64::MAX).is_ok());
    assert!(range(..=-5).check(&i64::MIN).is_ok());
}

// ── count ───────────────────────────────────────────────────────────────────

#[test]
fn count_on_empty_container_matches_empty() {
    let none: Vec<i32> = Vec::new();
    assert!(count::<Vec<i32>, _>(0..=0).check(&none).is_ok());
    assert!(empty::<Vec<i32>>().check(&none).is_ok());
    assert!(empty::<Vec<i32>>().check(&vec![1]).is_err());
}

#[test]
fn count_measures_strings_in_chars() {
    let rule = count::<String, _>(5..=5);
    assert!(rule.check(&"héllo".to_string()).is_ok());
}

// ── characters ──────────────────────────────────────────────────────────────

#[rstest]
#[case::empty_set(CharacterSet::new())]
#[case::numerics(CharacterSet::numerics())]
#[case::alphanumerics(CharacterSet::alphanumerics())]
fn characters_on_empty_string_always_passes(#[case] set: CharacterSet) {
    assert!(characters::<str>(set).check("").is_ok());
}

#[test]
fn characters_reports_the_first_offender() {
    let err = characters::<str>(CharacterSet::numerics())
        .check("01a2b")
        .unwrap_err();
    assert_eq!(err.to_string(), "string contains unavailable character `a`");
}

// ── email ───────────────────────────────────────────────────────────────────

#[rstest]
#[case::bare_word("asd", false)]
#[case::double_at("asd@asda@.ad", false)]
#[case::trailing_dot("bar@foo.", false)]
#[case::missing_local_part("@microsoft.com", false)]
#[case::plain("john@apple.com", true)]
#[case::dotted_local_part("john.appleseed@apple.com", true)]
fn email_shape(#[case] candidate: &str, #[case] valid: bool) {
    assert_eq!(email::<str>().check(candidate).is_ok(), valid);
}

// ── nil ─────────────────────────────────────────────────────────────────────

#[test]
fn nil_accepts_absence_only() {
    assert!(nil::<i64>().check(&None).is_ok());
    assert_eq!(
        nil::<i64>().check(&Some(1)).unwrap_err().to_string(),
        "is not nil"
    );
}

// ── equals ──────────────────────────────────────────────────────────────────

#[test]
fn equals_compares_against_the_expected_value() {
    let rule = equals("production".to_string());
    assert!(rule.check(&"production".to_string()).is_ok());
    assert!(rule.check(&"staging".to_string()).is_err());
}

// ── matches ─────────────────────────────────────────────────────────────────

#[test]
fn matches_validates_against_a_compiled_pattern() {
    let rule = matches::<str>(r"^v\d+\.\d+$").unwrap();
    assert!(rule.check("v1.2").is_ok());
    assert!(rule.check("1.2").is_err());
}

#[test]
fn matches_rejects_invalid_patterns_at_registration() {
    assert!(matches::<str>("[oops").is_err());
}

// ── length ──────────────────────────────────────────────────────────────────

#[test]
fn length_behaves_like_count_with_one_message() {
    let rule = length::<str>(3..=20);
    assert!(rule.check("abc").is_ok());
    assert_eq!(
        rule.check("ab").unwrap_err().to_string(),
        "This length of value must be in 3...20"
    );
    assert_eq!(
        rule.check(&"x".repeat(21)).unwrap_err().to_string(),
        "This length of value must be in 3...20"
    );
}
