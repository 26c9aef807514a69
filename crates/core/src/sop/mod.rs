//! Implicant parsing and validation for SOP solution files.
//!
//! A solution file contains one implicant per line: exactly `bit_width`
//! characters from `{0, 1, -}`, most significant bit first. Two quirks of
//! the file format are load-bearing and deliberately preserved:
//!
//! - For `bit_width > 0`, a blank line is *skipped* (it is not an implicant
//!   at all), which allows blank separator lines between implicants.
//! - For `bit_width = 0`, a blank line is the *only* valid implicant: it
//!   denotes the constant function's sole minterm, 0.

mod minterms;

pub use minterms::MintermIter;

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Error type for SOP solution loading.
///
/// Validation is fail-fast: the first offending line aborts the load, so no
/// coverage computation ever runs over a partially valid solution.
#[derive(Debug, Error)]
pub enum InvalidImplicantError {
    /// At bit width 0 the only valid implicant is the empty one.
    #[error("implicant {index}: expected an empty implicant at bit width 0, found {text:?}")]
    NonEmptyAtZeroWidth { index: usize, text: String },

    /// The implicant does not have exactly `bit_width` characters.
    #[error("implicant {index}: length {found} does not match bit width {expected}: {text:?}")]
    LengthMismatch { index: usize, expected: u32, found: usize, text: String },

    /// The implicant contains a character other than '0', '1', '-'.
    #[error("implicant {index}: illegal character {ch:?} (only '0', '1', '-' allowed): {text:?}")]
    IllegalCharacter { index: usize, ch: char, text: String },

    /// Underlying IO error while reading the file.
    #[error("failed to read SOP file: {0}")]
    Io(#[from] std::io::Error),
}

/// One implicant (cube): a validated string over `{0, 1, -}`.
///
/// Fixed positions constrain input bits, `-` positions are free. The empty
/// implicant exists only at bit width 0 and covers the single minterm 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Implicant {
    text: String,
}

impl Implicant {
    /// The implicant's literal string form, MSB first.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of literals: fixed ('0' or '1') positions.
    pub fn literal_count(&self) -> u64 {
        self.text.chars().filter(|&ch| ch == '0' || ch == '1').count() as u64
    }

    /// Number of free ('-') positions.
    pub fn free_count(&self) -> u32 {
        self.text.chars().filter(|&ch| ch == '-').count() as u32
    }

    /// Lazily enumerate the minterms this implicant covers.
    ///
    /// The iterator yields exactly `2^free_count()` distinct values, each in
    /// `[0, 2^bit_width)`. Nothing is materialized up front: a cube with
    /// many free positions is walked one minterm at a time.
    pub fn minterms(&self, bit_width: u32) -> MintermIter {
        MintermIter::new(&self.text, bit_width)
    }
}

/// An ordered SOP solution: the implicants in file order.
///
/// Insertion order is preserved so diagnostics can point at the first
/// occurrence of a duplicated implicant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SopSolution {
    implicants: Vec<Implicant>,
}

impl SopSolution {
    /// Parse and validate a solution from its textual form.
    pub fn parse(input: &str, bit_width: u32) -> Result<Self, InvalidImplicantError> {
        let mut implicants = Vec::new();

        for raw in input.lines() {
            let line = raw.trim();
            if line.is_empty() {
                if bit_width == 0 {
                    implicants.push(Implicant { text: String::new() });
                }
                continue;
            }
            validate(line, bit_width, implicants.len())?;
            implicants.push(Implicant { text: line.to_string() });
        }

        Ok(Self { implicants })
    }

    /// Load a solution from a file on disk.
    pub fn from_file(path: impl AsRef<Path>, bit_width: u32) -> Result<Self, InvalidImplicantError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents, bit_width)
    }

    /// The implicants in file order.
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    /// Number of implicants in the solution.
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// Whether the solution contains no implicants at all.
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// Total literal count across all implicants (the quality metric).
    pub fn literal_count(&self) -> u64 {
        self.implicants.iter().map(Implicant::literal_count).sum()
    }
}

/// Validate a single non-blank implicant line.
fn validate(line: &str, bit_width: u32, index: usize) -> Result<(), InvalidImplicantError> {
    if bit_width == 0 {
        // Blank lines never reach here, so any line at width 0 is invalid.
        return Err(InvalidImplicantError::NonEmptyAtZeroWidth {
            index,
            text: line.to_string(),
        });
    }

    let found = line.chars().count();
    if found != bit_width as usize {
        return Err(InvalidImplicantError::LengthMismatch {
            index,
            expected: bit_width,
            found,
            text: line.to_string(),
        });
    }

    for ch in line.chars() {
        if ch != '0' && ch != '1' && ch != '-' {
            return Err(InvalidImplicantError::IllegalCharacter {
                index,
                ch,
                text: line.to_string(),
            });
        }
    }

    Ok(())
}
