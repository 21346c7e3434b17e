//! Count assignable IPv4 addresses in a list of CIDR networks, split into
//! private (RFC1918) and public address space.

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use error::{IpCountError, Result};
use output::{report, report_skipped, Console, ReportMode};
use processing::{count_networks, process_lines, ErrorPolicy, Outcome};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings for one counting run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub report: ReportMode,
    pub policy: ErrorPolicy,
}

/// Read the whole input file.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| IpCountError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Count the networks listed in `options.input`.
///
/// Progress and the summary report go to `console`; the `total` and `json`
/// report modes write to `out`. Nothing is written to `out` when the run fails.
pub fn run<W: Write, O: Write>(
    options: &RunOptions,
    console: &mut Console<W>,
    out: &mut O,
) -> Result<Outcome> {
    log::info!("#Start run() input={}", options.input.display());

    let contents = read_input(&options.input)?;
    let lines: Vec<&str> = contents.lines().collect();

    console.heading("init")?;
    console.message("input file", options.input.display())?;
    console.message("network count", count_networks(&lines))?;

    console.blank()?;
    console.heading("progress")?;
    let outcome = process_lines(&lines, options.policy, console)?;

    report_skipped(&outcome.skipped, console)?;
    report(&outcome.summary, options.report, console, out)?;

    log::info!("#End run() total={:?}", outcome.summary.total);
    Ok(outcome)
}
