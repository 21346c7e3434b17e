//! Fold the lines of an input file into per-class totals.

use super::aggregate::{Aggregator, Summary};
use crate::error::{IpCountError, ParseError, Result};
use crate::models::Network;
use crate::output::Console;
use std::io::Write;

/// What to do with a line that is not a valid network.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the run on the first invalid line.
    #[default]
    Abort,
    /// Record the line and carry on.
    SkipInvalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub error: ParseError,
}

#[derive(Debug)]
pub struct Outcome {
    pub summary: Summary,
    pub skipped: Vec<SkippedLine>,
}

/// Blank lines and `#` comments carry no network.
pub fn is_ignored(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

pub fn count_networks(lines: &[&str]) -> usize {
    lines.iter().filter(|l| !is_ignored(l)).count()
}

/// Parse, classify and accumulate each line in order, writing progress to `console`.
///
/// # Returns
/// * `Ok(Outcome)` - Totals and any lines skipped under [`ErrorPolicy::SkipInvalid`]
/// * `Err(IpCountError::Parse)` - First invalid line under [`ErrorPolicy::Abort`]
pub fn process_lines<W: Write>(
    lines: &[&str],
    policy: ErrorPolicy,
    console: &mut Console<W>,
) -> Result<Outcome> {
    let count = count_networks(lines);
    log::info!("#Start process_lines() networks={count} policy={policy:?}");

    let mut aggregator = Aggregator::new();
    let mut skipped = Vec::new();
    let mut done = 0;

    for (i, line) in lines.iter().enumerate() {
        if is_ignored(line) {
            log::trace!("ignore line {}", i + 1);
            continue;
        }
        done += 1;
        let network = match Network::parse(line) {
            Ok(network) => network,
            Err(error) => match policy {
                ErrorPolicy::Abort => {
                    return Err(IpCountError::Parse {
                        line: i + 1,
                        source: error,
                    });
                }
                ErrorPolicy::SkipInvalid => {
                    log::info!("Skipping line {}: {}", i + 1, error);
                    skipped.push(SkippedLine {
                        line: i + 1,
                        error,
                    });
                    continue;
                }
            },
        };

        let classification = network.classification();
        aggregator.accumulate(classification, &network);
        log::debug!("{network} {classification} size={}", network.size());

        console.progress(
            (
                classification.as_str(),
                format!("{network}][{}", network.size()),
            ),
            (
                "progress",
                format!("{done}/{count}][total: {}", aggregator.running_total()),
            ),
        )?;
    }

    Ok(Outcome {
        summary: aggregator.summary(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseReason;
    use crate::processing::Bucket;

    fn run(lines: &[&str], policy: ErrorPolicy) -> (Result<Outcome>, String) {
        let mut console = Console::new(Vec::new(), false, false);
        let outcome = process_lines(lines, policy, &mut console);
        (outcome, String::from_utf8(console.into_inner()).unwrap())
    }

    #[test]
    fn test_is_ignored() {
        assert!(is_ignored(""));
        assert!(is_ignored("   \t"));
        assert!(is_ignored("# office ranges"));
        assert!(is_ignored("  #10.0.0.0/8"));
        assert!(!is_ignored("10.0.0.0/8"));
    }

    #[test]
    fn test_process_lines_totals_and_progress() {
        let (outcome, diag) = run(
            &["10.0.0.0/24", "192.168.1.0/24", "8.8.8.0/24"],
            ErrorPolicy::Abort,
        );
        let outcome = outcome.unwrap();
        assert_eq!(
            outcome.summary.total,
            Bucket {
                networks: 3,
                addresses: 762
            }
        );
        assert!(outcome.skipped.is_empty());
        let lines: Vec<&str> = diag.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[+][private:][10.0.0.0/24][254]",
                "[.][progress:][1/3][total: 254]",
                "[+][private:][192.168.1.0/24][254]",
                "[.][progress:][2/3][total: 508]",
                "[+][public:][8.8.8.0/24][254]",
                "[.][progress:][3/3][total: 762]",
            ]
        );
    }

    #[test]
    fn test_process_lines_reports_normalized_network() {
        let (outcome, diag) = run(&[" 10.0.0.5/24 "], ErrorPolicy::Abort);
        assert_eq!(outcome.unwrap().summary.private.addresses, 254);
        assert!(diag.starts_with("[+][private:][10.0.0.0/24][254]"));
    }

    #[test]
    fn test_process_lines_skips_blank_and_comments() {
        let (outcome, diag) = run(
            &["# list", "", "10.0.0.0/24", "   ", "8.8.8.0/24"],
            ErrorPolicy::Abort,
        );
        assert_eq!(outcome.unwrap().summary.total.networks, 2);
        assert!(diag.contains("[2/2]"));
    }

    #[test]
    fn test_process_lines_aborts_on_first_error() {
        let (outcome, diag) = run(
            &["10.0.0.0/24", "not.a.network", "1.2.3.999/24"],
            ErrorPolicy::Abort,
        );
        match outcome {
            Err(IpCountError::Parse { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source.input, "not.a.network");
                assert_eq!(source.reason, ParseReason::OctetCount(3));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert_eq!(diag.lines().count(), 2);
    }

    #[test]
    fn test_process_lines_skip_invalid() {
        let (outcome, _) = run(
            &["10.0.0.0/24", "not.a.network", "8.8.8.0/24", "1.2.3.999/24"],
            ErrorPolicy::SkipInvalid,
        );
        let outcome = outcome.unwrap();
        assert_eq!(outcome.summary.total.networks, 2);
        assert_eq!(outcome.summary.total.addresses, 508);
        let lines: Vec<usize> = outcome.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 4]);
        assert_eq!(
            outcome.skipped[1].error.reason,
            ParseReason::OctetOutOfRange("999".into())
        );
    }

    #[test]
    fn test_process_lines_empty_input() {
        let (outcome, diag) = run(&[], ErrorPolicy::Abort);
        assert_eq!(outcome.unwrap().summary, Summary::default());
        assert_eq!(diag, "");
    }
}
