//! Boolean function specification and its loader.
//!
//! A spec file has exactly three meaningful lines:
//! 1. bit width (decimal integer)
//! 2. on-set minterms (whitespace separated, may be empty)
//! 3. don't-care minterms (whitespace separated, may be empty)
//!
//! Loading is purely syntactic: listed minterms are *not* range-checked
//! against the bit width. An out-of-range minterm can never be produced by
//! any implicant, so it is simply never matched.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Largest bit width the checker supports.
///
/// Minterms are held as `u64`, so a function can have at most 64 inputs.
pub const MAX_BIT_WIDTH: u32 = 64;

/// Error type for spec file loading.
#[derive(Debug, Error)]
pub enum MalformedSpecError {
    /// The file has fewer than the three required lines.
    #[error("spec file is missing line {0} (expected 3 lines: bit width, on-set, dc-set)")]
    MissingLine(usize),

    /// The first line is not a non-negative decimal integer.
    #[error("bit width is not a valid integer: {0:?}")]
    BadBitWidth(String),

    /// The bit width cannot be represented with `u64` minterms.
    #[error("bit width {0} exceeds the supported maximum of {MAX_BIT_WIDTH}")]
    BitWidthTooLarge(u32),

    /// A set line contains a token that is not a non-negative decimal integer.
    #[error("invalid minterm token {token:?} on line {line}")]
    BadMinterm { line: usize, token: String },

    /// Underlying IO error while reading the file.
    #[error("failed to read spec file: {0}")]
    Io(#[from] std::io::Error),
}

/// A boolean function specification.
///
/// Immutable after construction. `on_set` and `dont_care_set` need not be
/// disjoint; membership in either suppresses off-set classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    /// Number of input variables (0..=64).
    pub bit_width: u32,
    /// Minterms where the function must be 1.
    pub on_set: HashSet<u64>,
    /// Minterms where the function value is unconstrained.
    pub dont_care_set: HashSet<u64>,
}

impl FunctionSpec {
    /// Parse a spec from its textual form.
    ///
    /// Lines beyond the third are ignored.
    pub fn parse(input: &str) -> Result<Self, MalformedSpecError> {
        let mut lines = input.lines().map(str::trim);

        let width_line = lines.next().ok_or(MalformedSpecError::MissingLine(1))?;
        let bit_width: u32 = width_line
            .parse()
            .map_err(|_| MalformedSpecError::BadBitWidth(width_line.to_string()))?;
        if bit_width > MAX_BIT_WIDTH {
            return Err(MalformedSpecError::BitWidthTooLarge(bit_width));
        }

        let on_line = lines.next().ok_or(MalformedSpecError::MissingLine(2))?;
        let dc_line = lines.next().ok_or(MalformedSpecError::MissingLine(3))?;

        let on_set = parse_minterm_set(on_line, 2)?;
        let dont_care_set = parse_minterm_set(dc_line, 3)?;

        Ok(Self { bit_width, on_set, dont_care_set })
    }

    /// Load a spec from a file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MalformedSpecError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Whether a minterm is allowed to be covered (on-set or don't-care).
    pub fn is_allowed(&self, minterm: u64) -> bool {
        self.on_set.contains(&minterm) || self.dont_care_set.contains(&minterm)
    }
}

/// Parse one whitespace-separated set line. An empty line is the empty set.
fn parse_minterm_set(line: &str, line_no: usize) -> Result<HashSet<u64>, MalformedSpecError> {
    let mut set = HashSet::new();
    for token in line.split_whitespace() {
        let value: u64 = token.parse().map_err(|_| MalformedSpecError::BadMinterm {
            line: line_no,
            token: token.to_string(),
        })?;
        set.insert(value);
    }
    Ok(set)
}
