//! Command line arguments.

use crate::output::ReportMode;
use crate::processing::ErrorPolicy;
use crate::RunOptions;
use clap::builder::FalseyValueParser;
use clap::Parser;
use log::LevelFilter;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "ip-count", version)]
#[command(about = "Count assignable IPv4 addresses in a list of CIDR networks")]
pub struct Args {
    /// Text file with one CIDR network per line
    pub input_file: PathBuf,

    /// How to present the final totals
    #[arg(
        long,
        value_enum,
        default_value_t = ReportMode::Summary,
        env = "IP_COUNT_REPORT"
    )]
    pub report: ReportMode,

    /// Overwrite the progress lines in place instead of scrolling
    #[arg(long, env = "IP_COUNT_LIVE", value_parser = FalseyValueParser::new())]
    pub live: bool,

    /// Skip invalid lines and list them after the run
    #[arg(long)]
    pub keep_going: bool,

    /// Disable colors on the diagnostic stream
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// More log output, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// log4rs YAML config file, replaces the built-in stderr logger
    #[arg(long, env = "IP_COUNT_LOG_CONFIG")]
    pub log_config: Option<PathBuf>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Colors only when asked for and stderr is a terminal.
    pub fn color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            input: self.input_file.clone(),
            report: self.report,
            policy: if self.keep_going {
                ErrorPolicy::SkipInvalid
            } else {
                ErrorPolicy::Abort
            },
        }
    }
}
