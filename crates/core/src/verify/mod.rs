//! The verification engine: four independent correctness checks over a
//! parsed SOP solution.
//!
//! All four checks always run to completion; there is no short-circuit, so
//! the detailed report can show every failure at once. The checks are:
//!
//! 1. Duplicate implicants (textual identity, not cube equivalence).
//! 2. Literal-count bound: fails when `literals >= |on-set| * bit_width`
//!    (equality already fails; only applies at bit width > 0 with a
//!    non-empty on-set).
//! 3. On-set coverage: every on-set minterm must be covered by some
//!    implicant.
//! 4. Off-set coverage: no implicant may produce a minterm outside
//!    on-set ∪ don't-care set; each hit counts, even repeats.

mod reservoir;

pub use reservoir::Reservoir;

use std::collections::{HashMap, HashSet};
use std::fmt;

use rand::Rng;

use crate::sop::SopSolution;
use crate::spec::FunctionSpec;

/// A sampled duplicate: the first and repeated positions of an implicant.
///
/// Indices are 0-based positions within the parsed solution (blank
/// separator lines are not counted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePair {
    pub first_index: usize,
    pub index: usize,
    pub text: String,
}

impl fmt::Display for DuplicatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} and line {}: {}", self.first_index, self.index, self.text)
    }
}

/// Outcome of verifying one solution against one spec.
///
/// Recomputed per run, never persisted. Sample vectors are bounded by the
/// `sample_limit` passed to [`verify`] and are empty when it is 0.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// Total '0'/'1' characters across all implicants.
    pub literal_count: u64,
    /// Number of repeated implicant lines.
    pub duplicate_count: u64,
    /// On-set minterms never covered by any implicant.
    pub uncovered_on_count: u64,
    /// Minterms produced outside on-set ∪ don't-care set (with repeats).
    pub off_set_hit_count: u64,
    /// Whether the literal-count bound check failed.
    pub literal_bound_exceeded: bool,
    /// Sampled duplicate pairs.
    pub duplicate_samples: Vec<DuplicatePair>,
    /// Sampled uncovered on-set minterms.
    pub uncovered_samples: Vec<u64>,
    /// Sampled off-set minterm hits.
    pub off_set_samples: Vec<u64>,
}

impl Verdict {
    /// Overall verdict: all four checks clean.
    pub fn pass(&self) -> bool {
        self.duplicate_count == 0
            && self.uncovered_on_count == 0
            && self.off_set_hit_count == 0
            && !self.literal_bound_exceeded
    }
}

/// Run all four checks and assemble the verdict.
///
/// `sample_limit` caps each diagnostic sample list; 0 disables example
/// retention while keeping every count exact. The random generator drives
/// reservoir eviction only, so a seeded generator gives a reproducible
/// sample. Enumeration cost is exponential in the number of free positions
/// per implicant; that is the accepted price of exhaustive verification.
pub fn verify<R: Rng + ?Sized>(
    spec: &FunctionSpec,
    solution: &SopSolution,
    sample_limit: usize,
    rng: &mut R,
) -> Verdict {
    let literal_count = solution.literal_count();

    // Check 2: literal-count bound.
    let on_size = spec.on_set.len() as u64;
    let literal_bound_exceeded = spec.bit_width > 0
        && on_size > 0
        && literal_count >= on_size * u64::from(spec.bit_width);

    // Check 1: textual duplicates, first occurrence wins.
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Reservoir::new(sample_limit);
    for (index, implicant) in solution.implicants().iter().enumerate() {
        match first_seen.get(implicant.as_str()) {
            Some(&first_index) => duplicates.offer(
                DuplicatePair { first_index, index, text: implicant.as_str().to_string() },
                rng,
            ),
            None => {
                first_seen.insert(implicant.as_str(), index);
            }
        }
    }

    // Checks 3 and 4 share one pass over the enumerated minterms.
    let mut covered_on: HashSet<u64> = HashSet::new();
    let mut off_hits = Reservoir::new(sample_limit);
    for implicant in solution.implicants() {
        for minterm in implicant.minterms(spec.bit_width) {
            if spec.on_set.contains(&minterm) {
                covered_on.insert(minterm);
            } else if !spec.dont_care_set.contains(&minterm) {
                off_hits.offer(minterm, rng);
            }
        }
    }

    let mut uncovered = Reservoir::new(sample_limit);
    for &minterm in &spec.on_set {
        if !covered_on.contains(&minterm) {
            uncovered.offer(minterm, rng);
        }
    }

    Verdict {
        literal_count,
        duplicate_count: duplicates.seen(),
        uncovered_on_count: uncovered.seen(),
        off_set_hit_count: off_hits.seen(),
        literal_bound_exceeded,
        duplicate_samples: duplicates.into_items(),
        uncovered_samples: uncovered.into_items(),
        off_set_samples: off_hits.into_items(),
    }
}
