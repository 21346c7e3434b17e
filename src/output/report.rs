//! Final report in one of the selectable modes.

use super::terminal::Console;
use crate::processing::{Bucket, SkippedLine, Summary};
use std::io::{self, Write};

/// How the final totals are presented.
#[derive(clap::ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ReportMode {
    /// Categorized summary on the diagnostic stream.
    #[default]
    Summary,
    /// Only the grand-total address count on stdout.
    Total,
    /// The summary as a JSON object on stdout.
    Json,
}

fn bucket_message(bucket: &Bucket) -> String {
    let Bucket {
        networks,
        addresses,
    } = bucket;
    format!("networks: {networks}][addresses: {addresses}")
}

/// Write the final totals.
///
/// # Arguments
/// * `summary` - Totals to report
/// * `mode` - Presentation mode
/// * `console` - Diagnostic stream
/// * `out` - Primary result stream
pub fn report<W: Write, O: Write>(
    summary: &Summary,
    mode: ReportMode,
    console: &mut Console<W>,
    out: &mut O,
) -> io::Result<()> {
    log::info!("#Start report() mode={:?}", mode);
    match mode {
        ReportMode::Summary => {
            console.blank()?;
            console.heading("summary")?;
            console.message("internal", bucket_message(&summary.private))?;
            console.message("external", bucket_message(&summary.public))?;
            console.message("total", bucket_message(&summary.total))?;
        }
        ReportMode::Total => {
            writeln!(out, "{}", summary.total.addresses)?;
        }
        ReportMode::Json => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// List the lines dropped by a run that skips invalid input.
pub fn report_skipped<W: Write>(
    skipped: &[SkippedLine],
    console: &mut Console<W>,
) -> io::Result<()> {
    if skipped.is_empty() {
        return Ok(());
    }
    log::info!("Skipped {} invalid line(s)", skipped.len());
    console.blank()?;
    console.heading("skipped")?;
    for s in skipped {
        console.notice(&format!("line {}", s.line), &s.error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, ParseReason};

    fn sample() -> Summary {
        let private = Bucket {
            networks: 2,
            addresses: 508,
        };
        let public = Bucket {
            networks: 1,
            addresses: 254,
        };
        Summary {
            private,
            public,
            total: private + public,
        }
    }

    fn run(mode: ReportMode) -> (String, String) {
        let mut console = Console::new(Vec::new(), false, false);
        let mut out = Vec::new();
        report(&sample(), mode, &mut console, &mut out).unwrap();
        (
            String::from_utf8(console.into_inner()).unwrap(),
            String::from_utf8(out).unwrap(),
        )
    }

    #[test]
    fn test_report_summary() {
        let (diag, out) = run(ReportMode::Summary);
        assert_eq!(out, "");
        assert_eq!(
            diag,
            "\n[SUMMARY]\n\
             [+][internal:][networks: 2][addresses: 508]\n\
             [+][external:][networks: 1][addresses: 254]\n\
             [+][total:][networks: 3][addresses: 762]\n"
        );
    }

    #[test]
    fn test_report_total() {
        let (diag, out) = run(ReportMode::Total);
        assert_eq!(diag, "");
        assert_eq!(out, "762\n");
    }

    #[test]
    fn test_report_json() {
        let (_, out) = run(ReportMode::Json);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["private"]["networks"], 2);
        assert_eq!(v["public"]["addresses"], 254);
        assert_eq!(v["total"]["addresses"], 762);
    }

    #[test]
    fn test_report_skipped() {
        let mut console = Console::new(Vec::new(), false, false);
        let skipped = vec![SkippedLine {
            line: 2,
            error: ParseError::new("bad", ParseReason::OctetCount(1)),
        }];
        report_skipped(&skipped, &mut console).unwrap();
        let diag = String::from_utf8(console.into_inner()).unwrap();
        assert!(diag.contains("[SKIPPED]"));
        assert!(diag.contains("[.][line 2:][\"bad\" is not a valid ipv4 network"));
    }

    #[test]
    fn test_report_skipped_empty_is_silent() {
        let mut console = Console::new(Vec::new(), false, false);
        report_skipped(&[], &mut console).unwrap();
        assert!(console.into_inner().is_empty());
    }
}
