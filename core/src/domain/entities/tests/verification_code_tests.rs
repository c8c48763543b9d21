//! Unit tests for verification code entity

use crate::domain::entities::verification_code::{
    CodeViolation, VerificationCode, CODE_FIELD, LENGTH_MESSAGE, NUMERIC_MESSAGE,
};

#[test]
fn test_parse_valid_code() {
    let code = VerificationCode::parse("123456").unwrap();
    assert_eq!(code.as_str(), "123456");
    assert_eq!(code.to_string(), "123456");
    assert_eq!(code.digit_at(0), Some('1'));
    assert_eq!(code.digit_at(5), Some('6'));
    assert_eq!(code.digit_at(6), None);
}

#[test]
fn test_all_zero_code_is_well_formed() {
    assert!(VerificationCode::parse("000000").is_ok());
}

#[test]
fn test_short_code_reports_length_only() {
    assert_eq!(
        VerificationCode::violations("12345"),
        vec![CodeViolation::Length]
    );

    let error = VerificationCode::parse("12345").unwrap_err();
    let errors = error.field_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, CODE_FIELD);
    assert_eq!(errors[0].message, LENGTH_MESSAGE);
    assert_eq!(errors[0].value.as_deref(), Some("12345"));
}

#[test]
fn test_letters_report_numeric_only() {
    assert_eq!(
        VerificationCode::violations("12a456"),
        vec![CodeViolation::NonNumeric]
    );
}

#[test]
fn test_empty_code_reports_both_violations() {
    let error = VerificationCode::parse("").unwrap_err();
    let messages: Vec<&str> = error
        .field_errors()
        .iter()
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(messages, vec![LENGTH_MESSAGE, NUMERIC_MESSAGE]);
}

#[test]
fn test_long_non_numeric_code_reports_both_violations() {
    assert_eq!(
        VerificationCode::violations("12345x7"),
        vec![CodeViolation::Length, CodeViolation::NonNumeric]
    );
}

#[test]
fn test_non_ascii_digits_rejected() {
    // Arabic-Indic digits are numeric in Unicode but not accepted
    assert_eq!(
        VerificationCode::violations("١٢٣٤٥٦"),
        vec![CodeViolation::NonNumeric]
    );
}

#[test]
fn test_whitespace_is_not_trimmed() {
    assert!(VerificationCode::parse(" 12345").is_err());
    assert!(VerificationCode::parse("123456 ").is_err());
}
