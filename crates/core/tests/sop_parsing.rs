use std::fs;

use sopcheck_core::sop::{InvalidImplicantError, SopSolution};
use tempfile::tempdir;

#[test]
fn parses_implicants_in_file_order() {
    let solution = SopSolution::parse("01-\n1-0\n", 3).expect("parse");
    let texts: Vec<&str> = solution.implicants().iter().map(|i| i.as_str()).collect();
    assert_eq!(texts, ["01-", "1-0"]);
}

/// Blank lines between implicants are separators, not implicants.
#[test]
fn blank_lines_are_skipped_at_positive_width() {
    let solution = SopSolution::parse("01\n\n10\n\n", 2).expect("parse");
    assert_eq!(solution.len(), 2);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let solution = SopSolution::parse("  01  \n", 2).expect("parse");
    assert_eq!(solution.implicants()[0].as_str(), "01");
}

/// At bit width 0 a blank line is the one valid implicant.
#[test]
fn zero_width_accepts_single_empty_line() {
    let solution = SopSolution::parse("\n", 0).expect("parse");
    assert_eq!(solution.len(), 1);
    assert_eq!(solution.implicants()[0].as_str(), "");
    assert_eq!(solution.literal_count(), 0);
}

#[test]
fn zero_width_rejects_non_empty_line() {
    let err = SopSolution::parse("0\n", 0).unwrap_err();
    assert!(matches!(err, InvalidImplicantError::NonEmptyAtZeroWidth { .. }));
}

#[test]
fn rejects_wrong_length() {
    let err = SopSolution::parse("01\n011\n", 2).unwrap_err();
    match err {
        InvalidImplicantError::LengthMismatch { index, expected, found, text } => {
            assert_eq!(index, 1);
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
            assert_eq!(text, "011");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_illegal_character() {
    let err = SopSolution::parse("0x\n", 2).unwrap_err();
    match err {
        InvalidImplicantError::IllegalCharacter { index, ch, text } => {
            assert_eq!(index, 0);
            assert_eq!(ch, 'x');
            assert_eq!(text, "0x");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Validation is fail-fast: the error index counts parsed implicants, with
/// skipped blank lines excluded.
#[test]
fn error_index_ignores_skipped_blank_lines() {
    let err = SopSolution::parse("01\n\n0y\n", 2).unwrap_err();
    match err {
        InvalidImplicantError::IllegalCharacter { index, .. } => assert_eq!(index, 1),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn literal_count_ignores_free_positions() {
    let solution = SopSolution::parse("01-\n---\n1--\n", 3).expect("parse");
    assert_eq!(solution.literal_count(), 3);
    assert_eq!(solution.implicants()[0].literal_count(), 2);
    assert_eq!(solution.implicants()[1].literal_count(), 0);
    assert_eq!(solution.implicants()[1].free_count(), 3);
}

#[test]
fn from_file_reads_solution_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("answer.sop");
    fs::write(&path, "0-\n11\n").expect("write sop");

    let solution = SopSolution::from_file(&path, 2).expect("load sop");
    assert_eq!(solution.len(), 2);
}

#[test]
fn from_file_reports_io_errors() {
    let dir = tempdir().expect("tempdir");
    let err = SopSolution::from_file(dir.path().join("nope.sop"), 2).unwrap_err();
    assert!(matches!(err, InvalidImplicantError::Io(_)));
}
