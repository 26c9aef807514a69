use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sop_checker::resolve_mode;
use sopcheck_core::report::render;
use sopcheck_core::sop::SopSolution;
use sopcheck_core::spec::FunctionSpec;
use sopcheck_core::verify::verify;

/// Sum-of-products solution checker.
///
/// This CLI is a thin wrapper around `sopcheck-core` (exposed in code as
/// `sopcheck_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
///
/// The verdict is communicated via stdout text; the exit code is 0 for any
/// completed verification, PASS or FAIL alike. Unreadable or malformed
/// inputs exit non-zero with a message on stderr.
#[derive(Parser, Debug)]
#[command(
    name = "sop-checker",
    version,
    about = "Check a sum-of-products solution against a boolean function spec",
    long_about = None
)]
struct Cli {
    /// Spec file (3 lines: bit width, on-set, don't-care set).
    spec_file: PathBuf,

    /// SOP file (one implicant per line, MSB first, only 0/1/-; for bit
    /// width 0 use a single empty line).
    sop_file: PathBuf,

    /// Only print PASS (with literal count) or FAIL.
    #[arg(long)]
    quiet: bool,

    /// Print summary statistics and the result only.
    #[arg(long)]
    summary: bool,

    /// Number of example terms/pairs to list for failing checks (0 = none).
    #[arg(long, default_value_t = 0)]
    sample: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let spec = FunctionSpec::from_file(&cli.spec_file)
        .with_context(|| format!("Failed to load spec file {}", cli.spec_file.display()))?;

    let solution = SopSolution::from_file(&cli.sop_file, spec.bit_width)
        .with_context(|| format!("Failed to load SOP file {}", cli.sop_file.display()))?;

    let verdict = verify(&spec, &solution, cli.sample, &mut rand::rng());

    let mode = resolve_mode(cli.quiet, cli.summary);
    print!("{}", render(mode, &spec, &solution, &verdict));

    Ok(())
}
