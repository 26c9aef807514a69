//! Rendering of a [`Verdict`](crate::verify::Verdict) in the three output
//! modes.
//!
//! Rendering is pure string building so every mode can be unit tested
//! without spawning a process; frontends just print the result.

use std::fmt::Write as _;

use crate::sop::SopSolution;
use crate::spec::FunctionSpec;
use crate::verify::Verdict;

/// Width of the `=` / `-` ruler lines in the detailed report.
const RULER_WIDTH: usize = 60;

/// Output mode for a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Single machine-readable line: `PASS <literals>` or `FAIL`.
    Terse,
    /// Statistics block plus the result, no per-check detail.
    Summary,
    /// Statistics, one `[OK]`/`[ERROR]` line per check with optional
    /// examples, and a final result line.
    #[default]
    Detailed,
}

/// Render the verdict in the requested mode.
///
/// The returned string is newline-terminated and ready to print as-is.
pub fn render(
    mode: ReportMode,
    spec: &FunctionSpec,
    solution: &SopSolution,
    verdict: &Verdict,
) -> String {
    match mode {
        ReportMode::Terse => render_terse(verdict),
        ReportMode::Summary => render_summary(spec, solution, verdict),
        ReportMode::Detailed => render_detailed(spec, solution, verdict),
    }
}

/// The single-line form consumed by grading harnesses.
pub fn render_terse(verdict: &Verdict) -> String {
    if verdict.pass() {
        format!("PASS {}\n", verdict.literal_count)
    } else {
        "FAIL\n".to_string()
    }
}

/// Statistics block plus the result line.
pub fn render_summary(spec: &FunctionSpec, solution: &SopSolution, verdict: &Verdict) -> String {
    let mut out = String::new();
    push_stats(&mut out, spec, solution, verdict);
    let _ = writeln!(out, "result: {}", pass_str(verdict));
    out
}

/// The full per-check report.
pub fn render_detailed(spec: &FunctionSpec, solution: &SopSolution, verdict: &Verdict) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(RULER_WIDTH));
    push_stats(&mut out, spec, solution, verdict);

    let _ = writeln!(out, "{}", "-".repeat(RULER_WIDTH));
    if verdict.duplicate_count > 0 {
        let _ = write!(out, "[ERROR] duplicate implicants found ({})", verdict.duplicate_count);
        push_examples(&mut out, &verdict.duplicate_samples);
    } else {
        let _ = writeln!(out, "[OK] no duplicate implicants.");
    }

    let _ = writeln!(out, "{}", "-".repeat(RULER_WIDTH));
    if verdict.literal_bound_exceeded {
        let _ = writeln!(
            out,
            "[ERROR] literal count >= |on-set| * bit width ({} >= {} * {}).",
            verdict.literal_count,
            spec.on_set.len(),
            spec.bit_width
        );
    } else {
        let _ = writeln!(out, "[OK] literal count < |on-set| * bit width.");
        if spec.on_set.is_empty() {
            let _ = writeln!(out, "[NOTE] |on-set| = 0 (trivially satisfied).");
        }
    }

    let _ = writeln!(out, "{}", "-".repeat(RULER_WIDTH));
    if verdict.uncovered_on_count > 0 {
        let _ =
            write!(out, "[ERROR] on-set not covered ({} terms)", verdict.uncovered_on_count);
        push_examples(&mut out, &verdict.uncovered_samples);
    } else {
        let _ = writeln!(out, "[OK] all on-set terms covered.");
    }

    let _ = writeln!(out, "{}", "-".repeat(RULER_WIDTH));
    if verdict.off_set_hit_count > 0 {
        let _ = write!(out, "[ERROR] SOP covers off-set ({} terms)", verdict.off_set_hit_count);
        push_examples(&mut out, &verdict.off_set_samples);
    } else {
        let _ = writeln!(out, "[OK] SOP does not cover off-set.");
    }

    let _ = writeln!(out, "{}", "=".repeat(RULER_WIDTH));
    let _ = writeln!(out, "[RESULT] {}", pass_str(verdict));
    out
}

fn pass_str(verdict: &Verdict) -> &'static str {
    if verdict.pass() {
        "PASS"
    } else {
        "FAIL"
    }
}

fn push_stats(out: &mut String, spec: &FunctionSpec, solution: &SopSolution, verdict: &Verdict) {
    let _ = writeln!(out, "bit width: {}", spec.bit_width);
    let _ = writeln!(out, "on-set size: {}", spec.on_set.len());
    let _ = writeln!(out, "dc-set size: {}", spec.dont_care_set.len());
    let _ = writeln!(out, "SOP implicants: {}", solution.len());
    let _ = writeln!(out, "SOP literals: {}", verdict.literal_count);
}

/// Finish an `[ERROR]` line, appending retained examples when sampling
/// produced any.
fn push_examples<T: std::fmt::Display>(out: &mut String, samples: &[T]) {
    if samples.is_empty() {
        out.push_str(".\n");
        return;
    }
    let rendered: Vec<String> = samples.iter().map(ToString::to_string).collect();
    let _ = writeln!(out, ". examples: [{}]", rendered.join(", "));
}
