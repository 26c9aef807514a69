//! Shared helpers for the sop-checker CLI binary.

use sopcheck_core::report::ReportMode;

/// Map the two mode flags to a report mode.
///
/// `--quiet` takes precedence over `--summary` when both are given; with
/// neither flag the detailed report is the default.
pub fn resolve_mode(quiet: bool, summary: bool) -> ReportMode {
    if quiet {
        ReportMode::Terse
    } else if summary {
        ReportMode::Summary
    } else {
        ReportMode::Detailed
    }
}
