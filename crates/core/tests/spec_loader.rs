use std::collections::HashSet;
use std::fs;

use sopcheck_core::spec::{FunctionSpec, MalformedSpecError};
use tempfile::tempdir;

#[test]
fn parses_three_line_spec() {
    let spec = FunctionSpec::parse("3\n0 1 5\n2 7\n").expect("parse spec");
    assert_eq!(spec.bit_width, 3);
    assert_eq!(spec.on_set, HashSet::from([0, 1, 5]));
    assert_eq!(spec.dont_care_set, HashSet::from([2, 7]));
}

#[test]
fn empty_set_lines_mean_empty_sets() {
    let spec = FunctionSpec::parse("2\n\n\n").expect("parse spec");
    assert!(spec.on_set.is_empty());
    assert!(spec.dont_care_set.is_empty());
}

#[test]
fn trailing_lines_are_ignored() {
    let spec = FunctionSpec::parse("1\n0\n1\nextra garbage\n").expect("parse spec");
    assert_eq!(spec.bit_width, 1);
}

#[test]
fn rejects_non_integer_bit_width() {
    let err = FunctionSpec::parse("two\n0\n\n").unwrap_err();
    assert!(matches!(err, MalformedSpecError::BadBitWidth(_)));
}

#[test]
fn rejects_bit_width_above_64() {
    let err = FunctionSpec::parse("65\n\n\n").unwrap_err();
    assert!(matches!(err, MalformedSpecError::BitWidthTooLarge(65)));
}

#[test]
fn rejects_non_integer_minterm_token() {
    let err = FunctionSpec::parse("2\n0 x 3\n\n").unwrap_err();
    match err {
        MalformedSpecError::BadMinterm { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "x");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_missing_lines() {
    assert!(matches!(FunctionSpec::parse("").unwrap_err(), MalformedSpecError::MissingLine(1)));
    assert!(matches!(FunctionSpec::parse("2").unwrap_err(), MalformedSpecError::MissingLine(2)));
    assert!(matches!(
        FunctionSpec::parse("2\n0 1").unwrap_err(),
        MalformedSpecError::MissingLine(3)
    ));
}

/// Loading is purely syntactic: minterms outside [0, 2^bit_width) are kept.
/// They can never be matched by an implicant, which is harmless.
#[test]
fn out_of_range_minterms_are_accepted() {
    let spec = FunctionSpec::parse("2\n0 9\n100\n").expect("parse spec");
    assert!(spec.on_set.contains(&9));
    assert!(spec.dont_care_set.contains(&100));
}

#[test]
fn is_allowed_covers_both_sets() {
    let spec = FunctionSpec::parse("2\n0\n3\n").expect("parse spec");
    assert!(spec.is_allowed(0));
    assert!(spec.is_allowed(3));
    assert!(!spec.is_allowed(1));
}

#[test]
fn from_file_reads_spec_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("func.spec");
    fs::write(&path, "2\n0 1 2 3\n\n").expect("write spec");

    let spec = FunctionSpec::from_file(&path).expect("load spec");
    assert_eq!(spec.bit_width, 2);
    assert_eq!(spec.on_set.len(), 4);
}

#[test]
fn from_file_reports_io_errors() {
    let dir = tempdir().expect("tempdir");
    let err = FunctionSpec::from_file(dir.path().join("nope.spec")).unwrap_err();
    assert!(matches!(err, MalformedSpecError::Io(_)));
}
